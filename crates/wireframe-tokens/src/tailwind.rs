//! Tailwind `theme.extend` built from a token set.
//!
//! Pixel values become `rem` against a fixed 16px root; line heights stay
//! unitless and breakpoint widths pass through unchanged.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::TokenError;
use crate::grid::Breakpoints;
use crate::tokens::TokenSet;

/// Root font size the `rem` conversion divides by.
pub const REM_BASE_PX: f64 = 16.0;

pub fn px_to_rem(px: f64) -> String {
    format!("{}rem", px / REM_BASE_PX)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub center: bool,
    pub screens: Breakpoints,
}

/// The `theme.extend` block of a Tailwind config.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindTheme {
    /// `name -> [size, { lineHeight }]`
    pub font_size: Map<String, Value>,
    pub spacing: Map<String, Value>,
    pub container: Container,
    pub screens: Map<String, Value>,
}

impl TailwindTheme {
    pub fn from_tokens(tokens: &TokenSet) -> Self {
        let fs = &tokens.font_sizes;
        let lh = &tokens.line_heights;
        let font_size = [
            ("body", fs.body, lh.body),
            ("h3", fs.h3, lh.h3),
            ("h2", fs.h2, lh.h2),
            ("h1", fs.h1, lh.h1),
        ]
        .into_iter()
        .map(|(name, px, line_height)| {
            (
                name.to_string(),
                json!([px_to_rem(px), { "lineHeight": line_height }]),
            )
        })
        .collect();

        let spacing = tokens
            .spacing
            .entries()
            .into_iter()
            .map(|(step, px)| (step.to_string(), Value::from(px_to_rem(px))))
            .collect();

        // Tailwind's `xs` is the unprefixed default, so it has no screen.
        let screens = tokens
            .containers
            .entries()
            .into_iter()
            .filter(|(name, _)| *name != "xs")
            .map(|(name, width)| (name.to_string(), Value::from(width)))
            .collect();

        Self {
            font_size,
            spacing,
            container: Container {
                center: true,
                screens: tokens.containers.clone(),
            },
            screens,
        }
    }

    /// Render a complete `tailwind.config.js` exporting this theme.
    pub fn render_config(&self) -> Result<String, TokenError> {
        let config = json!({ "theme": { "extend": self } });
        let body = serde_json::to_string_pretty(&config)?;
        Ok(format!("export default {body};\n"))
    }
}
