//! Group expansion control and slot activation.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use rustc_hash::FxHashSet;

use crate::catalog::ResultDataset;
use crate::options::Options;
use crate::session::backend::{LoadOptions, LocalBoxFuture, ViewerBackend};
use crate::session::slot::{
    SlotHandle, SlotKey, SlotRegistry, SlotStatus,
};
use crate::viewspec;

// ── Activation task ──────────────────────────────────────────────────────

/// One slot's activation, modeled as a cancellable future.
///
/// Dropping the task cancels the activation; the slot then stays claimed
/// (`mounted`) with status `Pending` and is never retried — the same
/// terminal no-retry policy as a failed load. Awaiting it runs viewer
/// creation and then the structure load, in that order, recording the
/// outcome in the slot. The task never returns an error: failures are
/// swallowed at the slot boundary so one bad structure cannot block the
/// rest of its group.
pub struct ActivationTask {
    key: SlotKey,
    fut: LocalBoxFuture<()>,
}

impl ActivationTask {
    /// The slot this task activates.
    #[must_use]
    pub fn key(&self) -> &SlotKey {
        &self.key
    }
}

impl Future for ActivationTask {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        self.get_mut().fut.as_mut().poll(cx)
    }
}

// ── Controller ───────────────────────────────────────────────────────────

/// Ensures each group's viewer sessions are created at most once, exactly
/// when the user first expands that group.
///
/// The disclosure widget fires its toggle on every collapse *and* expand,
/// so [`on_toggle`](Self::on_toggle) must be — and is — idempotent: the
/// first call per group claims and activates every slot, all later calls
/// return nothing.
pub struct GroupController<B: ViewerBackend> {
    backend: Rc<B>,
    registry: SlotRegistry<B::Instance>,
    expanded: FxHashSet<String>,
    options: Options,
}

impl<B: ViewerBackend + 'static> GroupController<B> {
    /// Build a controller over `dataset`, creating one inert slot per item
    /// (eagerly, for all groups) before any activation happens.
    #[must_use]
    pub fn new(backend: Rc<B>, dataset: &ResultDataset, options: Options) -> Self {
        Self {
            backend,
            registry: SlotRegistry::from_dataset(dataset),
            expanded: FxHashSet::default(),
            options,
        }
    }

    /// React to an expand/collapse toggle on `group`.
    ///
    /// First toggle per group: marks the group expanded, claims every
    /// unmounted slot synchronously (so re-entrant toggles during in-flight
    /// activations see them as taken), and returns one [`ActivationTask`]
    /// per claimed slot for the caller to spawn. Later toggles: empty vec.
    /// A group with no slots — or a key the dataset never had — yields an
    /// empty vec as well.
    pub fn on_toggle(&mut self, group: &str) -> Vec<ActivationTask> {
        if !self.expanded.insert(group.to_owned()) {
            log::debug!("group {group} already expanded; toggle is a no-op");
            return Vec::new();
        }
        let mut tasks = Vec::new();
        for slot in self.registry.slots_in(group) {
            if !slot.borrow_mut().claim() {
                continue;
            }
            tasks.push(self.activation(Rc::clone(slot)));
        }
        log::info!("expanded group {group}: {} activation(s)", tasks.len());
        tasks
    }

    /// Whether a group has been expanded at least once.
    #[must_use]
    pub fn is_expanded(&self, group: &str) -> bool {
        self.expanded.contains(group)
    }

    /// The slot registry (presentation-layer queries).
    #[must_use]
    pub fn registry(&self) -> &SlotRegistry<B::Instance> {
        &self.registry
    }

    /// Current status of one slot, if it exists.
    #[must_use]
    pub fn slot_status(&self, key: &SlotKey) -> Option<SlotStatus> {
        self.registry.get(key).map(|s| s.borrow().status().clone())
    }

    /// Build the activation future for one claimed slot: construct the
    /// default view specification, create the viewer, then load — both
    /// awaited in causal order inside the same future.
    fn activation(&self, slot: SlotHandle<B::Instance>) -> ActivationTask {
        let key = slot.borrow().key.clone();
        let spec = viewspec::default_spec(&key.item, &self.options.source);
        let layout = self.options.viewer.clone();
        let backend = Rc::clone(&self.backend);
        let task_key = key.clone();
        let fut = Box::pin(async move {
            let instance =
                match backend.create_viewer(&key, &layout).await {
                    Ok(instance) => instance,
                    Err(e) => {
                        log::warn!("viewer creation failed for {key}: {e}");
                        slot.borrow_mut().fail(e.to_string());
                        return;
                    }
                };
            let load = LoadOptions::default();
            match backend.load_spec(&instance, spec, &load).await {
                Ok(()) => {
                    slot.borrow_mut().complete(instance);
                    log::debug!("slot {key} loaded");
                }
                Err(e) => {
                    log::warn!("structure load failed for {key}: {e}");
                    slot.borrow_mut().fail(e.to_string());
                }
            }
        });
        ActivationTask { key: task_key, fut }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::GlycomotifError;
    use crate::options::ViewerLayoutOptions;
    use crate::viewspec::ViewSpec;

    /// Records every create/load call; loads reject for blocklisted items.
    #[derive(Default)]
    struct MockBackend {
        created: RefCell<Vec<String>>,
        loaded_urls: RefCell<Vec<String>>,
        fail_create: Vec<String>,
        fail_load: Vec<String>,
    }

    fn download_url(spec: &ViewSpec) -> String {
        let mvsj: serde_json::Value =
            serde_json::from_str(&spec.to_mvsj().unwrap()).unwrap();
        mvsj["root"]["params"]["url"].as_str().unwrap().to_owned()
    }

    impl ViewerBackend for MockBackend {
        type Instance = String;

        fn create_viewer(
            &self,
            key: &SlotKey,
            _layout: &ViewerLayoutOptions,
        ) -> LocalBoxFuture<Result<String, GlycomotifError>> {
            self.created.borrow_mut().push(key.element_id());
            let result = if self.fail_create.contains(&key.item) {
                Err(GlycomotifError::Viewer(format!(
                    "no container for {key}"
                )))
            } else {
                Ok(key.item.clone())
            };
            Box::pin(async move { result })
        }

        fn load_spec(
            &self,
            instance: &String,
            spec: ViewSpec,
            options: &LoadOptions,
        ) -> LocalBoxFuture<Result<(), GlycomotifError>> {
            assert!(!options.replace_existing);
            self.loaded_urls.borrow_mut().push(download_url(&spec));
            let result = if self.fail_load.contains(instance) {
                Err(GlycomotifError::Viewer(format!(
                    "download rejected for {instance}"
                )))
            } else {
                Ok(())
            };
            Box::pin(async move { result })
        }
    }

    fn dataset() -> ResultDataset {
        ResultDataset::from_groups([
            (
                "G1".to_owned(),
                vec![
                    (
                        "AF_AFO25142F1".to_owned(),
                        "Alpha-(1,3)-fucosyltransferase".to_owned(),
                        "glycosyltransferase".to_owned(),
                    ),
                    (
                        "AF_AFP86993F1".to_owned(),
                        "Lectin".to_owned(),
                        "sugar binding".to_owned(),
                    ),
                ],
            ),
            (
                "G2".to_owned(),
                vec![(
                    "AF_AFA0A0K0EH67F1".to_owned(),
                    "Thioredoxin domain-containing protein".to_owned(),
                    String::new(),
                )],
            ),
            ("EMPTY".to_owned(), vec![]),
        ])
    }

    fn controller(
        backend: Rc<MockBackend>,
    ) -> GroupController<MockBackend> {
        GroupController::new(backend, &dataset(), Options::default())
    }

    fn drive(tasks: Vec<ActivationTask>) {
        pollster::block_on(async {
            for task in tasks {
                task.await;
            }
        });
    }

    #[test]
    fn repeated_toggles_activate_once() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));

        let tasks = ctrl.on_toggle("G1");
        assert_eq!(tasks.len(), 2);
        drive(tasks);

        for _ in 0..3 {
            assert!(ctrl.on_toggle("G1").is_empty());
        }
        assert_eq!(backend.created.borrow().len(), 2);
        assert_eq!(backend.loaded_urls.borrow().len(), 2);
    }

    #[test]
    fn second_toggle_before_first_resolves_creates_nothing_extra() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));

        // First toggle claims the slots synchronously; nothing has been
        // driven yet, so no create has resolved.
        let tasks = ctrl.on_toggle("G1");
        assert_eq!(tasks.len(), 2);
        assert!(ctrl.on_toggle("G1").is_empty());

        drive(tasks);
        assert_eq!(backend.created.borrow().len(), 2);
    }

    #[test]
    fn failed_load_is_isolated_to_its_slot() {
        let backend = Rc::new(MockBackend {
            fail_load: vec!["AF_AFP86993F1".to_owned()],
            ..MockBackend::default()
        });
        let mut ctrl = controller(Rc::clone(&backend));
        drive(ctrl.on_toggle("G1"));

        let ok = SlotKey::new("G1", "AF_AFO25142F1");
        let bad = SlotKey::new("G1", "AF_AFP86993F1");
        assert_eq!(ctrl.slot_status(&ok), Some(SlotStatus::Loaded));
        assert!(matches!(
            ctrl.slot_status(&bad),
            Some(SlotStatus::Failed(_))
        ));
        // The sibling's session survived the neighbor's failure.
        let slot = ctrl.registry().get(&ok).unwrap();
        assert!(slot.borrow().session().is_some());
    }

    #[test]
    fn failed_create_leaves_slot_claimed_without_session() {
        let backend = Rc::new(MockBackend {
            fail_create: vec!["AF_AFA0A0K0EH67F1".to_owned()],
            ..MockBackend::default()
        });
        let mut ctrl = controller(Rc::clone(&backend));
        drive(ctrl.on_toggle("G2"));

        let key = SlotKey::new("G2", "AF_AFA0A0K0EH67F1");
        let slot = ctrl.registry().get(&key).unwrap();
        assert!(slot.borrow().is_mounted());
        assert!(slot.borrow().session().is_none());
        assert!(matches!(
            *slot.borrow().status(),
            SlotStatus::Failed(_)
        ));
        // Claimed means never retried.
        assert!(ctrl.on_toggle("G2").is_empty());
        assert_eq!(backend.loaded_urls.borrow().len(), 0);
    }

    #[test]
    fn expanding_one_group_leaves_others_inert() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));
        let tasks = ctrl.on_toggle("G1");
        assert!(tasks.iter().all(|t| t.key().group == "G1"));
        drive(tasks);

        let other = SlotKey::new("G2", "AF_AFA0A0K0EH67F1");
        assert_eq!(ctrl.slot_status(&other), Some(SlotStatus::Inert));
        assert!(!ctrl.registry().get(&other).unwrap().borrow().is_mounted());
        assert!(backend
            .created
            .borrow()
            .iter()
            .all(|id| id.starts_with("slot-G1-")));
    }

    #[test]
    fn empty_group_toggles_without_error() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));
        assert!(ctrl.on_toggle("EMPTY").is_empty());
        assert!(ctrl.is_expanded("EMPTY"));
        assert_eq!(backend.created.borrow().len(), 0);
    }

    #[test]
    fn activation_loads_canonical_lowercase_url() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));
        drive(ctrl.on_toggle("G1"));
        assert!(backend
            .loaded_urls
            .borrow()
            .contains(&"https://models.rcsb.org/af_afo25142f1.bcif".to_owned()));
    }

    #[test]
    fn dropped_task_cancels_but_keeps_claim() {
        let backend = Rc::new(MockBackend::default());
        let mut ctrl = controller(Rc::clone(&backend));
        let tasks = ctrl.on_toggle("G2");
        assert_eq!(tasks.len(), 1);
        drop(tasks);

        let key = SlotKey::new("G2", "AF_AFA0A0K0EH67F1");
        assert_eq!(ctrl.slot_status(&key), Some(SlotStatus::Pending));
        // Still claimed: a later toggle does not reissue it.
        assert!(ctrl.on_toggle("G2").is_empty());
    }
}
