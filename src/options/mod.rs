//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (embedded viewer layout, structure source) are
//! consolidated here. Options serialize to/from TOML for presets stored in
//! `assets/presets/`.

mod source;
mod viewer;

use std::path::Path;

use serde::{Deserialize, Serialize};
pub use source::SourceOptions;
pub use viewer::ViewerLayoutOptions;

use crate::error::GlycomotifError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[source]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Embedded viewer layout configuration.
    pub viewer: ViewerLayoutOptions,
    /// Remote structure source configuration.
    pub source: SourceOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    /// [`GlycomotifError::Io`] on read failure,
    /// [`GlycomotifError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, GlycomotifError> {
        let content =
            std::fs::read_to_string(path).map_err(GlycomotifError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GlycomotifError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    /// [`GlycomotifError::Io`] on write failure,
    /// [`GlycomotifError::OptionsParse`] on serialization failure.
    pub fn save(&self, path: &Path) -> Result<(), GlycomotifError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlycomotifError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlycomotifError::Io)?;
        }
        std::fs::write(path, content).map_err(GlycomotifError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[source]
default_color = "green"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.source.default_color, "green");
        // Everything else should be default
        assert_eq!(opts.source.base_url, "https://models.rcsb.org");
        assert!(!opts.viewer.layout_expanded);
        assert!(!opts.viewer.show_controls);
    }
}
