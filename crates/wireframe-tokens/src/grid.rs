use serde::{Deserialize, Serialize};

use crate::config::GridSystem;

/// One CSS length per responsive breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Breakpoints {
    fn from_table(table: [&str; 5]) -> Self {
        let [xs, sm, md, lg, xl] = table.map(String::from);
        Self { xs, sm, md, lg, xl }
    }

    /// `(name, value)` pairs from smallest to largest breakpoint.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("xs", self.xs.as_str()),
            ("sm", self.sm.as_str()),
            ("md", self.md.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

impl GridSystem {
    /// Maximum container width per breakpoint.
    pub fn containers(self) -> Breakpoints {
        match self {
            Self::EightPoint => {
                Breakpoints::from_table(["100%", "540px", "720px", "1040px", "1320px"])
            }
            Self::TwoX => Breakpoints::from_table(["100%", "560px", "760px", "1080px", "1360px"]),
        }
    }

    /// Column gutter per breakpoint. Both grids currently share one table.
    pub fn gutters(self) -> Breakpoints {
        match self {
            Self::EightPoint => Breakpoints::from_table(["16px", "24px", "24px", "32px", "32px"]),
            Self::TwoX => Breakpoints::from_table(["16px", "24px", "24px", "32px", "32px"]),
        }
    }
}
