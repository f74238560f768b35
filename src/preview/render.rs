// document -> display text
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::project::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    /// Pretty-printed JSON, two-space indent.
    #[default]
    Json,
    Toon,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOON encode error: {0}")]
    Toon(#[from] toon_format::ToonError),
}

pub fn render(doc: &Document, format: RenderFormat) -> Result<String, RenderError> {
    let text = match format {
        RenderFormat::Json => serde_json::to_string_pretty(doc)?,
        RenderFormat::Toon => toon_format::encode_default(doc)?,
    };
    Ok(text)
}
