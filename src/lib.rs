// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// The session manager is single-threaded by design (UI event loop)
#![allow(clippy::future_not_send)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]

//! Catalog and viewer-session core for browsing glycan-binding motifs.
//!
//! Glycomotif is the non-rendering half of a motif browser: it holds the
//! sugar catalog and the precomputed search-result datasets, builds the
//! declarative MolViewSpec views handed to an external Molstar viewer, and
//! manages the lazy lifecycle of embedded viewer instances across
//! user-expandable result groups. The actual 3D rendering and structure
//! parsing live entirely in the external viewer; this crate only decides
//! *what* to load, *when*, and *where*.
//!
//! # Key entry points
//!
//! - [`catalog`] - sugars, search results, and grouped result datasets
//! - [`viewspec::ViewSpecBuilder`] - declarative view construction
//! - [`session::GroupController`] - lazy per-group viewer activation
//! - [`options::Options`] - runtime configuration (viewer layout, structure
//!   source)
//!
//! # Architecture
//!
//! Every result item gets an inert [`session::ViewerSlot`] when its group is
//! first rendered. Nothing talks to the external viewer until the user
//! expands a group; at that point the [`session::GroupController`] claims
//! each slot exactly once and issues one independent activation task per
//! slot. Activations are fire-and-forget futures: one failed structure
//! never blocks its siblings, and re-expanding a group is a no-op.

pub mod catalog;
pub mod error;
pub mod options;
pub mod session;
pub mod viewspec;

pub use error::GlycomotifError;
