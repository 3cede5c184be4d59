//! The consumed external viewer capability.

use std::future::Future;
use std::pin::Pin;

use crate::error::GlycomotifError;
use crate::options::ViewerLayoutOptions;
use crate::session::slot::SlotKey;
use crate::viewspec::ViewSpec;

/// Boxed single-threaded future, the return type of backend calls.
pub type LocalBoxFuture<T> = Pin<Box<dyn Future<Output = T>>>;

/// Options for one structure load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Base URL relative references in the specification resolve against.
    pub source_url: Option<String>,
    /// Run the loader's specification sanity checks.
    pub sanity_checks: bool,
    /// Replace a previously loaded state in the same viewer. Always false
    /// here: a session, once loaded, is never silently overwritten.
    pub replace_existing: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            source_url: None,
            sanity_checks: true,
            replace_existing: false,
        }
    }
}

/// External 3D viewer/loader pair.
///
/// The manager never inspects the viewer beyond success/failure of these
/// two calls. Implementations capture what they need by value — the
/// returned futures own their data and outlive the borrowed arguments.
pub trait ViewerBackend {
    /// Opaque live viewer handle. `'static` because activation futures own
    /// their instance across suspension points.
    type Instance: 'static;

    /// Create one viewer bound to the slot's placeholder region.
    fn create_viewer(
        &self,
        key: &SlotKey,
        layout: &ViewerLayoutOptions,
    ) -> LocalBoxFuture<Result<Self::Instance, GlycomotifError>>;

    /// Load a view specification into a created viewer.
    fn load_spec(
        &self,
        instance: &Self::Instance,
        spec: ViewSpec,
        options: &LoadOptions,
    ) -> LocalBoxFuture<Result<(), GlycomotifError>>;
}
