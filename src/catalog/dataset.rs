//! Grouped result datasets.
//!
//! A dataset maps a group key (the representative sugar surrounding, e.g.
//! `"7KHU_FUC_A_201"`) to the computed models matching it. Datasets are
//! produced offline and checked in as JSON where each item is a
//! `[title, keywords]` pair:
//!
//! ```json
//! { "7KHU_FUC_A_201": { "AF_AFO25142F1": ["Alpha-(1,3)-fucosyltransferase", "glycosyltransferase"] } }
//! ```

use std::collections::HashMap;

use rustc_hash::FxHashMap;

use crate::error::GlycomotifError;

/// Display metadata for one item in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMeta {
    /// Display title of the computed model.
    pub title: String,
    /// Search keywords associated with the model.
    pub keywords: String,
}

/// Immutable mapping of group key → item id → display metadata.
///
/// Supplied wholesale at render time; key uniqueness within each level is
/// guaranteed by the map representation, and no iteration order is promised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultDataset {
    groups: FxHashMap<String, FxHashMap<String, ItemMeta>>,
}

/// Wire form of a dataset: nested maps with `[title, keywords]` pairs.
type RawDataset = HashMap<String, HashMap<String, (String, String)>>;

impl ResultDataset {
    /// Parse a dataset from its checked-in JSON form.
    ///
    /// # Errors
    /// [`GlycomotifError::Dataset`] on malformed JSON.
    pub fn from_json(json: &str) -> Result<Self, GlycomotifError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let groups = raw
            .into_iter()
            .map(|(group, items)| {
                let items = items
                    .into_iter()
                    .map(|(id, (title, keywords))| {
                        (id, ItemMeta { title, keywords })
                    })
                    .collect();
                (group, items)
            })
            .collect();
        Ok(Self { groups })
    }

    /// Build a dataset programmatically (tests, fixtures).
    #[must_use]
    pub fn from_groups(
        groups: impl IntoIterator<
            Item = (String, Vec<(String, String, String)>),
        >,
    ) -> Self {
        let groups = groups
            .into_iter()
            .map(|(group, items)| {
                let items = items
                    .into_iter()
                    .map(|(id, title, keywords)| {
                        (id, ItemMeta { title, keywords })
                    })
                    .collect();
                (group, items)
            })
            .collect();
        Self { groups }
    }

    /// Number of groups.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group keys in sorted order (for stable presentation).
    #[must_use]
    pub fn group_keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> =
            self.groups.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Items of one group.
    ///
    /// # Errors
    /// [`GlycomotifError::NotFound`] if the group key is absent.
    pub fn group(
        &self,
        group: &str,
    ) -> Result<&FxHashMap<String, ItemMeta>, GlycomotifError> {
        self.groups
            .get(group)
            .ok_or_else(|| GlycomotifError::NotFound(format!("group {group}")))
    }

    /// Number of items in one group (0 for an absent group).
    #[must_use]
    pub fn group_len(&self, group: &str) -> usize {
        self.groups.get(group).map_or(0, FxHashMap::len)
    }

    /// Metadata of one item.
    ///
    /// # Errors
    /// [`GlycomotifError::NotFound`] if the group or item is absent.
    pub fn item(
        &self,
        group: &str,
        item: &str,
    ) -> Result<&ItemMeta, GlycomotifError> {
        self.group(group)?.get(item).ok_or_else(|| {
            GlycomotifError::NotFound(format!("item {item} in group {group}"))
        })
    }

    /// Iterate `(group key, item id, metadata)` over the whole dataset.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, &str, &ItemMeta)> + '_ {
        self.groups.iter().flat_map(|(group, items)| {
            items.iter().map(move |(id, meta)| {
                (group.as_str(), id.as_str(), meta)
            })
        })
    }
}
