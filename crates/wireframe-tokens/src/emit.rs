//! Token file persistence.
//!
//! The default output is an ES module with a single named export, so build
//! tooling can `import { tokens } from "./wireframe-ui-tokens.js"`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::TokenError;
use crate::tokens::TokenSet;

const JS_EXPORT_PREFIX: &str = "export const tokens = ";

/// On-disk format of the generated token file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TokenFormat {
    #[default]
    #[serde(rename = "js")]
    JsModule,
    #[serde(rename = "json")]
    Json,
}

impl TokenFormat {
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::JsModule => "wireframe-ui-tokens.js",
            Self::Json => "wireframe-ui-tokens.json",
        }
    }
}

impl fmt::Display for TokenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::JsModule => "js",
            Self::Json => "json",
        })
    }
}

impl FromStr for TokenFormat {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "js" | "mjs" | "module" => Ok(Self::JsModule),
            "json" => Ok(Self::Json),
            other => Err(TokenError::Settings(format!("unknown token format {other:?}"))),
        }
    }
}

/// Render the token set in the given format.
pub fn render(tokens: &TokenSet, format: TokenFormat) -> Result<String, TokenError> {
    let mut value = serde_json::to_value(tokens)?;
    integral_numbers(&mut value);
    let body = serde_json::to_string_pretty(&value)?;
    Ok(match format {
        TokenFormat::JsModule => format!("{JS_EXPORT_PREFIX}{body};\n"),
        TokenFormat::Json => format!("{body}\n"),
    })
}

/// Write the token file. A directory target gets the format's default file
/// name. Returns the path written.
pub fn write_token_file(
    target: &Path,
    tokens: &TokenSet,
    format: TokenFormat,
) -> Result<PathBuf, TokenError> {
    let path = if target.is_dir() {
        target.join(format.default_file_name())
    } else {
        target.to_path_buf()
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let content = render(tokens, format)?;
    std::fs::write(&path, content)?;
    tracing::info!(path = %path.display(), %format, "Wrote token file");
    Ok(path)
}

/// Read back a token file written by [`write_token_file`], in either format.
pub fn read_token_file(path: &Path) -> Result<TokenSet, TokenError> {
    let content = std::fs::read_to_string(path)?;
    parse_tokens(&content)
}

/// Parse token file contents, with or without the JS export wrapper.
pub fn parse_tokens(content: &str) -> Result<TokenSet, TokenError> {
    let trimmed = content.trim();
    let json = match trimmed.strip_prefix(JS_EXPORT_PREFIX) {
        Some(rest) => rest.trim_end_matches(';'),
        None => trimmed,
    };
    Ok(serde_json::from_str(json)?)
}

/// Print whole-number floats as integers (`16` rather than `16.0`). Relies on
/// `preserve_order` so fields keep their declaration order.
fn integral_numbers(value: &mut Value) {
    match value {
        Value::Number(n) => {
            if !n.is_f64() {
                return;
            }
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_numbers),
        Value::Object(map) => map.values_mut().for_each(integral_numbers),
        _ => {}
    }
}
