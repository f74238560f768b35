//! Preview configuration.
//!
//! Controls the placeholder tokens scalars project to and the format the
//! preview is rendered in. Read from TOON text; every key is optional and the
//! defaults reproduce the stock preview (`"STRING"`, `"number"`, JSON).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preview::render::RenderFormat;

pub const DEFAULT_STRING_PLACEHOLDER: &str = "STRING";
// a word, not a numeric example
pub const DEFAULT_NUMBER_PLACEHOLDER: &str = "number";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOON decode error: {0}")]
    Toon(#[from] toon_format::ToonError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub string_placeholder: String,
    pub number_placeholder: String,
    pub format: RenderFormat,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            string_placeholder: DEFAULT_STRING_PLACEHOLDER.to_string(),
            number_placeholder: DEFAULT_NUMBER_PLACEHOLDER.to_string(),
            format: RenderFormat::Json,
        }
    }
}

impl PreviewConfig {
    /// Decode a config from TOON text such as
    ///
    /// ```text
    /// string_placeholder: text
    /// format: toon
    /// ```
    pub fn from_toon(input: &str) -> Result<Self, ConfigError> {
        Ok(toon_format::decode_default(input)?)
    }

    pub fn with_format(mut self, format: RenderFormat) -> Self {
        self.format = format;
        self
    }
}
