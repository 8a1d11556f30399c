use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Layout grid strategy. Selects the container and gutter tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridSystem {
    #[default]
    #[serde(rename = "8-point + 4-point baseline")]
    EightPoint,
    #[serde(rename = "2x Grid")]
    TwoX,
}

impl GridSystem {
    pub const ALL: [GridSystem; 2] = [GridSystem::EightPoint, GridSystem::TwoX];

    /// Wire name, as written into token files.
    pub fn label(self) -> &'static str {
        match self {
            Self::EightPoint => "8-point + 4-point baseline",
            Self::TwoX => "2x Grid",
        }
    }
}

impl fmt::Display for GridSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GridSystem {
    type Err = TokenError;

    /// Accepts the wire names plus the short `8pt` / `2x` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "8-point + 4-point baseline" | "8pt" => Ok(Self::EightPoint),
            "2x Grid" | "2x" => Ok(Self::TwoX),
            other => Err(TokenError::invalid(format!(
                "unknown grid system {other:?}"
            ))),
        }
    }
}

/// Named musical-interval scale ratios offered when prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleRatio {
    MinorThird,
    MajorThird,
    PerfectFourth,
    PerfectFifth,
    GoldenRatio,
}

impl ScaleRatio {
    pub const ALL: [ScaleRatio; 5] = [
        ScaleRatio::MinorThird,
        ScaleRatio::MajorThird,
        ScaleRatio::PerfectFourth,
        ScaleRatio::PerfectFifth,
        ScaleRatio::GoldenRatio,
    ];

    pub fn value(self) -> f64 {
        match self {
            Self::MinorThird => 1.2,
            Self::MajorThird => 1.25,
            Self::PerfectFourth => 1.333,
            Self::PerfectFifth => 1.5,
            Self::GoldenRatio => 1.618,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MinorThird => "Minor Third",
            Self::MajorThird => "Major Third",
            Self::PerfectFourth => "Perfect Fourth",
            Self::PerfectFifth => "Perfect Fifth",
            Self::GoldenRatio => "Golden Ratio",
        }
    }

    /// Preset whose value equals `ratio`, if any.
    pub fn from_value(ratio: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.value() == ratio)
    }
}

impl fmt::Display for ScaleRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

/// Upper bound on any multiplier applied to `base * ratio^3` during
/// derivation (the widest spacing step).
const LARGEST_MULTIPLIER: f64 = 2.5;

/// Inputs to token derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub grid_system: GridSystem,
    /// Base font size in pixels.
    pub base_font_size: f64,
    /// Multiplier between successive heading sizes.
    pub contrast_ratio: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            grid_system: GridSystem::EightPoint,
            base_font_size: 16.0,
            contrast_ratio: ScaleRatio::MinorThird.value(),
        }
    }
}

impl Configuration {
    /// Build a configuration, rejecting values the deriver cannot use.
    pub fn new(
        grid_system: GridSystem,
        base_font_size: f64,
        contrast_ratio: f64,
    ) -> Result<Self, TokenError> {
        let config = Self {
            grid_system,
            base_font_size,
            contrast_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Both numeric inputs must be positive and finite, and so must the
    /// largest magnitude derived from them.
    pub fn validate(&self) -> Result<(), TokenError> {
        check_positive("baseFontSize", self.base_font_size)?;
        check_positive("contrastRatio", self.contrast_ratio)?;

        let largest =
            self.base_font_size * self.contrast_ratio.max(1.0).powi(3) * LARGEST_MULTIPLIER;
        if !largest.is_finite() {
            return Err(TokenError::invalid(format!(
                "baseFontSize {} with contrastRatio {} overflows the type scale",
                self.base_font_size, self.contrast_ratio
            )));
        }
        Ok(())
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), TokenError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TokenError::invalid(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

/// Unparsed answers, as typed at a prompt or passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfiguration {
    pub grid_system: String,
    pub base_font_size: String,
    pub contrast_ratio: String,
}

impl TryFrom<RawConfiguration> for Configuration {
    type Error = TokenError;

    fn try_from(raw: RawConfiguration) -> Result<Self, Self::Error> {
        let grid_system = raw.grid_system.parse()?;
        let base_font_size = parse_number("baseFontSize", &raw.base_font_size)?;
        let contrast_ratio = parse_number("contrastRatio", &raw.contrast_ratio)?;
        Configuration::new(grid_system, base_font_size, contrast_ratio)
    }
}

/// Parse a decimal number, trimming surrounding whitespace.
pub fn parse_number(field: &str, input: &str) -> Result<f64, TokenError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| TokenError::invalid(format!("{field} must be a number, got {input:?}")))
}
