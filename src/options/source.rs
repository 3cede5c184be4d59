use serde::{Deserialize, Serialize};

use crate::viewspec::ParseFormat;

/// Remote structure source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SourceOptions {
    /// Base location computed models are downloaded from.
    pub base_url: String,
    /// Parse format tag for downloaded structures.
    pub format: ParseFormat,
    /// Uniform color applied by the default view specification.
    pub default_color: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            base_url: "https://models.rcsb.org".to_owned(),
            format: ParseFormat::Bcif,
            default_color: "blue".to_owned(),
        }
    }
}
