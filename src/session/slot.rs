//! Viewer slots and the per-group slot registry.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::catalog::{ItemMeta, ResultDataset};

// ── Keys ─────────────────────────────────────────────────────────────────

/// Stable composite key addressing one placeholder region:
/// group key + item id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    /// Group the slot belongs to.
    pub group: String,
    /// Item id of the computed model shown in the slot.
    pub item: String,
}

impl SlotKey {
    /// Create a key.
    #[must_use]
    pub fn new(group: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            item: item.into(),
        }
    }

    /// The document element id of the slot's placeholder region.
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("slot-{}-{}", self.group, self.item)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.item)
    }
}

// ── Status ───────────────────────────────────────────────────────────────

/// Per-slot result state, surfaced to the presentation layer so a failed
/// structure renders as a failure label rather than a silently blank region.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotStatus {
    /// Slot exists but its group was never expanded.
    #[default]
    Inert,
    /// Activation issued; viewer creation or load still in flight.
    Pending,
    /// Viewer live and structure loaded.
    Loaded,
    /// Viewer creation or load rejected. Terminal: never retried.
    Failed(String),
}

// ── Slot ─────────────────────────────────────────────────────────────────

/// One placeholder region bound to exactly one catalog item.
///
/// `mounted` transitions false→true exactly once, synchronously at the
/// moment activation is issued, so re-entrant toggles during an in-flight
/// activation already see the slot as claimed.
#[derive(Debug)]
pub struct ViewerSlot<I> {
    /// Composite key of the slot.
    pub key: SlotKey,
    /// Display metadata of the item.
    pub meta: ItemMeta,
    mounted: bool,
    status: SlotStatus,
    session: Option<I>,
}

impl<I> ViewerSlot<I> {
    fn new(key: SlotKey, meta: ItemMeta) -> Self {
        Self {
            key,
            meta,
            mounted: false,
            status: SlotStatus::Inert,
            session: None,
        }
    }

    /// Whether activation has been issued for this slot.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Current result state.
    #[must_use]
    pub fn status(&self) -> &SlotStatus {
        &self.status
    }

    /// The live viewer instance, if the load completed.
    #[must_use]
    pub fn session(&self) -> Option<&I> {
        self.session.as_ref()
    }

    /// Claim the slot for activation. Returns false if already claimed.
    pub(crate) fn claim(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.status = SlotStatus::Pending;
        true
    }

    pub(crate) fn complete(&mut self, session: I) {
        self.session = Some(session);
        self.status = SlotStatus::Loaded;
    }

    pub(crate) fn fail(&mut self, reason: String) {
        self.status = SlotStatus::Failed(reason);
    }
}

/// Shared handle to a slot. Single-threaded by design.
pub type SlotHandle<I> = Rc<RefCell<ViewerSlot<I>>>;

// ── Registry ─────────────────────────────────────────────────────────────

/// Explicit in-memory registry of slots, keyed by group.
///
/// Populated once at render time from the dataset — the controller never
/// re-queries the display surface to enumerate a group's slots. Slots for
/// *all* groups exist before any is activated.
#[derive(Debug, Default)]
pub struct SlotRegistry<I> {
    groups: FxHashMap<String, Vec<SlotHandle<I>>>,
}

impl<I> SlotRegistry<I> {
    /// Build the registry from a dataset, one slot per item. Slots within a
    /// group are ordered by item id for stable presentation.
    #[must_use]
    pub fn from_dataset(dataset: &ResultDataset) -> Self {
        let mut groups: FxHashMap<String, Vec<SlotHandle<I>>> =
            FxHashMap::default();
        for group in dataset.group_keys_sorted() {
            let _ = groups.insert(group.to_owned(), Vec::new());
        }
        for (group, item, meta) in dataset.iter() {
            let slot = ViewerSlot::new(
                SlotKey::new(group, item),
                meta.clone(),
            );
            if let Some(slots) = groups.get_mut(group) {
                slots.push(Rc::new(RefCell::new(slot)));
            }
        }
        for slots in groups.values_mut() {
            slots.sort_by(|a, b| {
                a.borrow().key.item.cmp(&b.borrow().key.item)
            });
        }
        Self { groups }
    }

    /// Group keys in lexicographic order, for stable presentation.
    #[must_use]
    pub fn group_keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> =
            self.groups.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Slots belonging to one group (empty for unknown groups).
    #[must_use]
    pub fn slots_in(&self, group: &str) -> &[SlotHandle<I>] {
        self.groups.get(group).map_or(&[], Vec::as_slice)
    }

    /// Handle to one slot, if it exists.
    #[must_use]
    pub fn get(&self, key: &SlotKey) -> Option<SlotHandle<I>> {
        self.groups.get(&key.group)?.iter().find_map(|s| {
            if s.borrow().key.item == key.item {
                Some(Rc::clone(s))
            } else {
                None
            }
        })
    }

    /// Total number of slots across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Whether the registry holds no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> ResultDataset {
        ResultDataset::from_groups([
            (
                "G1".to_owned(),
                vec![
                    ("B".to_owned(), "b".to_owned(), String::new()),
                    ("A".to_owned(), "a".to_owned(), String::new()),
                ],
            ),
            ("G2".to_owned(), vec![]),
        ])
    }

    #[test]
    fn registry_covers_all_groups_eagerly() {
        let reg: SlotRegistry<()> = SlotRegistry::from_dataset(&dataset());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.slots_in("G1").len(), 2);
        assert!(reg.slots_in("G2").is_empty());
        assert!(reg.slots_in("G3").is_empty());
    }

    #[test]
    fn group_keys_are_sorted() {
        let reg: SlotRegistry<()> = SlotRegistry::from_dataset(&dataset());
        assert_eq!(reg.group_keys_sorted(), vec!["G1", "G2"]);
    }

    #[test]
    fn slots_carry_item_metadata() {
        let reg: SlotRegistry<()> = SlotRegistry::from_dataset(&dataset());
        let slot = reg.get(&SlotKey::new("G1", "A")).unwrap();
        assert_eq!(slot.borrow().meta.title, "a");
    }

    #[test]
    fn slots_sorted_by_item_id() {
        let reg: SlotRegistry<()> = SlotRegistry::from_dataset(&dataset());
        let items: Vec<String> = reg
            .slots_in("G1")
            .iter()
            .map(|s| s.borrow().key.item.clone())
            .collect();
        assert_eq!(items, vec!["A", "B"]);
    }

    #[test]
    fn claim_is_once_only() {
        let reg: SlotRegistry<()> = SlotRegistry::from_dataset(&dataset());
        let slot = reg.get(&SlotKey::new("G1", "A")).unwrap();
        assert!(slot.borrow_mut().claim());
        assert!(!slot.borrow_mut().claim());
        assert_eq!(*slot.borrow().status(), SlotStatus::Pending);
    }

    #[test]
    fn element_id_is_composite() {
        let key = SlotKey::new("7KHU_FUC_A_201", "AF_AFO25142F1");
        assert_eq!(key.element_id(), "slot-7KHU_FUC_A_201-AF_AFO25142F1");
    }
}
