use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wireframe_tokens::emit::render;
use wireframe_tokens::{
    derive_tokens, Configuration, GridSystem, TokenError, TokenFormat, TokenSet,
};

/// Browser-side input. Missing fields take the stock defaults.
#[derive(Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigInput {
    grid_system: GridSystem,
    base_font_size: f64,
    contrast_ratio: f64,
}

impl Default for ConfigInput {
    fn default() -> Self {
        let config = Configuration::default();
        Self {
            grid_system: config.grid_system,
            base_font_size: config.base_font_size,
            contrast_ratio: config.contrast_ratio,
        }
    }
}

fn derive_from_json(config_json: &str) -> Result<TokenSet, TokenError> {
    let input: ConfigInput = serde_json::from_str(config_json)
        .map_err(|e| TokenError::InvalidConfiguration(e.to_string()))?;
    derive_tokens(&Configuration {
        grid_system: input.grid_system,
        base_font_size: input.base_font_size,
        contrast_ratio: input.contrast_ratio,
    })
}

/// Derive tokens from a JSON configuration. Returns the token set as JSON,
/// or `{"error": "..."}`.
#[wasm_bindgen]
pub fn derive_tokens_json(config_json: &str) -> String {
    derive_from_json(config_json)
        .and_then(|tokens| render(&tokens, TokenFormat::Json))
        .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
}
