//! Design-token generation for wireframe layouts.
//!
//! A [`Configuration`] (grid system, base font size, scale ratio) is turned
//! into a [`TokenSet`] by [`derive_tokens`]: a typographic scale, relative
//! line heights, a spacing scale and per-breakpoint container and gutter
//! widths. Every derived pixel magnitude sits on the 4px grid.

pub mod config;
pub mod emit;
pub mod error;
pub mod grid;
pub mod settings;
pub mod snap;
pub mod tailwind;
pub mod tokens;

pub use config::{Configuration, GridSystem, RawConfiguration, ScaleRatio};
pub use emit::TokenFormat;
pub use error::TokenError;
pub use grid::Breakpoints;
pub use settings::Settings;
pub use tokens::{derive_tokens, FontSizes, LineHeights, Spacing, TokenSet};
