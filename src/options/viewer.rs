use serde::{Deserialize, Serialize};

/// Layout configuration for embedded viewer instances.
///
/// Defaults match the catalog's fixed embedded layout: panel collapsed,
/// controls hidden. Passed verbatim to the external viewer at creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ViewerLayoutOptions {
    /// Start with the side panel expanded.
    pub layout_expanded: bool,
    /// Show the viewer control toolbar.
    pub show_controls: bool,
}
