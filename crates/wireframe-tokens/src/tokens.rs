//! The token set and its derivation from a [`Configuration`].
//!
//! Font sizes follow a geometric scale (`base * ratio^n` for h3, h2, h1),
//! line heights are a snapped pixel height divided by the size they apply to,
//! and spacing is a fixed ladder of base multiples. Container and gutter
//! widths are looked up from the grid system.

use serde::{Deserialize, Serialize};

use crate::config::{Configuration, GridSystem};
use crate::error::TokenError;
use crate::grid::Breakpoints;
use crate::snap::snap4;

/// Multiples of the base font size for each spacing step. `xs` and `s` share
/// a multiplier.
pub const SPACING_STEPS: [(&str, f64); 8] = [
    ("xxs", 0.75),
    ("xs", 1.0),
    ("s", 1.0),
    ("m", 1.25),
    ("l", 1.5),
    ("xl", 1.75),
    ("xxl", 2.0),
    ("xxxl", 2.5),
];

/// Size of the implicit small text relative to the base (14px at 16px).
const SMALL_TEXT_SCALE: f64 = 0.875;

/// Target line height as a multiple of font size, before snapping.
const BODY_LEADING: f64 = 1.5;
const SMALL_LEADING: f64 = 1.4;
const H3_LEADING: f64 = 1.3;
const HEADING_LEADING: f64 = 1.2;

/// Font sizes in pixels. `body` is the unsnapped base; headings are whole
/// multiples of four.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub body: f64,
    pub h3: f64,
    pub h2: f64,
    pub h1: f64,
}

impl FontSizes {
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("body", self.body),
            ("h3", self.h3),
            ("h2", self.h2),
            ("h1", self.h1),
        ]
    }
}

/// Unitless line-height ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineHeights {
    pub body: f64,
    pub small: f64,
    pub h3: f64,
    pub h2: f64,
    pub h1: f64,
}

impl LineHeights {
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("body", self.body),
            ("small", self.small),
            ("h3", self.h3),
            ("h2", self.h2),
            ("h1", self.h1),
        ]
    }
}

/// Spacing scale in whole pixels, smallest to largest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xxs: f64,
    pub xs: f64,
    pub s: f64,
    pub m: f64,
    pub l: f64,
    pub xl: f64,
    pub xxl: f64,
    pub xxxl: f64,
}

impl Spacing {
    pub fn entries(&self) -> [(&'static str, f64); 8] {
        [
            ("xxs", self.xxs),
            ("xs", self.xs),
            ("s", self.s),
            ("m", self.m),
            ("l", self.l),
            ("xl", self.xl),
            ("xxl", self.xxl),
            ("xxxl", self.xxxl),
        ]
    }
}

/// Complete derived token set, together with the inputs it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub grid_system: GridSystem,
    pub base_font_size: f64,
    pub contrast_ratio: f64,
    pub font_sizes: FontSizes,
    pub line_heights: LineHeights,
    pub spacing: Spacing,
    pub containers: Breakpoints,
    pub gutters: Breakpoints,
}

impl TokenSet {
    pub fn configuration(&self) -> Configuration {
        Configuration {
            grid_system: self.grid_system,
            base_font_size: self.base_font_size,
            contrast_ratio: self.contrast_ratio,
        }
    }
}

/// Derive the full token set. Fails only on an invalid configuration, before
/// anything is computed.
pub fn derive_tokens(config: &Configuration) -> Result<TokenSet, TokenError> {
    config.validate()?;

    let base = config.base_font_size;
    let ratio = config.contrast_ratio;
    tracing::debug!(
        grid = %config.grid_system,
        base,
        ratio,
        "Deriving design tokens"
    );

    let font_sizes = FontSizes {
        body: base,
        h3: snap4(base * ratio.powi(1)),
        h2: snap4(base * ratio.powi(2)),
        h1: snap4(base * ratio.powi(3)),
    };

    let line_heights = LineHeights {
        body: leading(base, BODY_LEADING),
        small: snap4(base * SMALL_LEADING) / (base * SMALL_TEXT_SCALE),
        h3: leading(font_sizes.h3, H3_LEADING),
        h2: leading(font_sizes.h2, HEADING_LEADING),
        h1: leading(font_sizes.h1, HEADING_LEADING),
    };

    let [xxs, xs, s, m, l, xl, xxl, xxxl] = SPACING_STEPS.map(|(_, mult)| snap4(base * mult));
    let spacing = Spacing {
        xxs,
        xs,
        s,
        m,
        l,
        xl,
        xxl,
        xxxl,
    };

    Ok(TokenSet {
        grid_system: config.grid_system,
        base_font_size: base,
        contrast_ratio: ratio,
        font_sizes,
        line_heights,
        spacing,
        containers: config.grid_system.containers(),
        gutters: config.grid_system.gutters(),
    })
}

/// Snapped line height over font size. A size that snapped to zero keeps the
/// unsnapped multiplier rather than dividing by zero.
fn leading(size: f64, multiplier: f64) -> f64 {
    if size > 0.0 {
        snap4(size * multiplier) / size
    } else {
        multiplier
    }
}
