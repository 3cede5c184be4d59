//! Grouped motif browser: collapsible per-group viewer grids.
//!
//! Every item gets its placeholder region at first render, but no Molstar
//! instance exists until its group is first expanded. The expand handler
//! asks the session controller for activation tasks and spawns each one
//! independently — a group with one bad structure still shows the rest.

use std::rc::Rc;

use dioxus::prelude::*;
use glycomotif::options::Options;
use glycomotif::session::{GroupController, SlotKey, SlotStatus};
use wasm_bindgen_futures::spawn_local;

use crate::data;
use crate::molstar::MolstarBackend;

/// One group's owned render snapshot: key plus `(item id, title, keywords)`.
type GroupRows = (String, Vec<(String, String, String)>);

/// Grouped results for one sugar.
#[component]
pub fn Groups(abbrev: String) -> Element {
    // The controller eagerly registers a slot for every item of every
    // group; expansion only ever claims, never re-creates.
    let controller = use_signal({
        let abbrev = abbrev.clone();
        move || {
            GroupController::new(
                Rc::new(MolstarBackend),
                &data::dataset_for(&abbrev),
                Options::default(),
            )
        }
    });
    // Bumped every time one activation settles, to refresh status labels.
    let activity: Signal<u32> = use_signal(|| 0);

    // Render rows straight from the registry slots: the item order and
    // display metadata the cards show are the ones the slots carry.
    let groups: Vec<GroupRows> = {
        let ctrl = controller.read();
        let registry = ctrl.registry();
        registry
            .group_keys_sorted()
            .into_iter()
            .map(|group| {
                let rows = registry
                    .slots_in(group)
                    .iter()
                    .map(|slot| {
                        let slot = slot.borrow();
                        (
                            slot.key.item.clone(),
                            slot.meta.title.clone(),
                            slot.meta.keywords.clone(),
                        )
                    })
                    .collect();
                (group.to_owned(), rows)
            })
            .collect()
    };

    rsx! {
        h1 { "Motif groups for {abbrev}" }
        div { class: "group-list",
            for (group, rows) in groups {
                GroupSection { group, rows, controller, activity }
            }
        }
    }
}

#[component]
fn GroupSection(
    group: String,
    rows: Vec<(String, String, String)>,
    controller: Signal<GroupController<MolstarBackend>>,
    activity: Signal<u32>,
) -> Element {
    let count = rows.len();
    let expand = {
        let group = group.clone();
        let mut controller = controller;
        move |_| {
            // Fires on every collapse and expand; the controller makes all
            // but the first call a no-op.
            let tasks = controller.write().on_toggle(&group);
            for task in tasks {
                let mut activity = activity;
                spawn_local(async move {
                    task.await;
                    activity += 1;
                });
            }
        }
    };

    rsx! {
        details { class: "group-section",
            summary { onclick: expand,
                span { class: "group-name", "{group}" }
                span { class: "group-count", "{count} found" }
            }
            div { class: "model-grid",
                for (item, title, keywords) in rows {
                    ModelCard {
                        group: group.clone(),
                        item,
                        title,
                        keywords,
                        controller,
                        activity,
                    }
                }
            }
        }
    }
}

#[component]
fn ModelCard(
    group: String,
    item: String,
    title: String,
    keywords: String,
    controller: Signal<GroupController<MolstarBackend>>,
    activity: Signal<u32>,
) -> Element {
    // Subscribe to activation completions so failure labels appear.
    let _ = activity();
    let key = SlotKey::new(group, item.clone());
    let failed = matches!(
        controller.read().slot_status(&key),
        Some(SlotStatus::Failed(_))
    );

    rsx! {
        div { class: "model-card",
            div { id: "{key.element_id()}", class: "viewer-slot",
                if failed {
                    div { class: "slot-failed", "failed to load" }
                }
            }
            div { class: "model-meta",
                div { class: "model-id", "{item}" }
                div { class: "model-title", "{title}" }
                div { class: "model-keywords", "{keywords}" }
            }
        }
    }
}
