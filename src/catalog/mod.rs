//! Sugar catalog and precomputed search-result data.
//!
//! All data here is static for the lifetime of a page view: the sugar table
//! ships with the crate, and the grouped result datasets are checked in as
//! already-computed JSON (the search pipeline that produced them is not part
//! of this repository). Lookups that miss return
//! [`GlycomotifError::NotFound`](crate::GlycomotifError::NotFound), which
//! callers render as a "not found" message rather than treating as fatal.

mod dataset;
mod sugars;

pub use dataset::{ItemMeta, ResultDataset};
pub use sugars::{
    builtin_results, builtin_sugars, rcsb_model_id, result_by_af_id,
    sugar_by_abbrev, MotifDetails, ResultInfo, SugarInfo,
};
