//! Result detail page: metadata table plus one embedded viewer.

use std::rc::Rc;

use dioxus::prelude::*;
use glycomotif::catalog::{rcsb_model_id, result_by_af_id, ResultDataset};
use glycomotif::options::Options;
use glycomotif::session::{GroupController, SlotKey};
use wasm_bindgen_futures::spawn_local;

use crate::data;
use crate::molstar::MolstarBackend;

/// The single-slot group key used by the detail page's controller.
const DETAIL_GROUP: &str = "detail";

/// Detail page for one computed model. The viewer loads deferred, after
/// the placeholder is in the document; re-running the effect is a no-op
/// thanks to the controller's idempotent toggle.
#[component]
pub fn Detail(af_id: String) -> Element {
    let Ok(result) = result_by_af_id(&af_id) else {
        return rsx! {
            div { class: "not-found", "Unknown AlphaFold ID" }
        };
    };
    let details = data::details_for(&af_id);
    let item_id = rcsb_model_id(&af_id);
    // Same key the controller's slot carries, so the placeholder id can
    // never drift from what the backend looks up.
    let slot_key = SlotKey::new(DETAIL_GROUP, item_id.clone());

    let controller = use_signal({
        let item_id = item_id.clone();
        let title = result.title.clone();
        move || {
            let dataset = ResultDataset::from_groups([(
                DETAIL_GROUP.to_owned(),
                vec![(item_id, title, String::new())],
            )]);
            GroupController::new(
                Rc::new(MolstarBackend),
                &dataset,
                Options::default(),
            )
        }
    });
    let _ = use_effect({
        let mut controller = controller;
        move || {
            for task in controller.write().on_toggle(DETAIL_GROUP) {
                spawn_local(task);
            }
        }
    });

    rsx! {
        h1 { "{result.title}" }
        div { class: "detail-layout",
            table { class: "detail-table",
                tbody {
                    DetailRow { label: "AlphaFold DB:", value: result.af_id.clone() }
                    DetailRow { label: "UniProtKB:", value: result.uniprot_id.clone() }
                    DetailRow {
                        label: "pLDDT (global):",
                        value: format!("{:.2}", details.plddt_global),
                    }
                    DetailRow { label: "Organism:", value: details.organism.clone() }
                    DetailRow {
                        label: "Total number of found motifs:",
                        value: details.motif_count.to_string(),
                    }
                    DetailRow {
                        label: "RMSD:",
                        value: format!("{} Å", details.rmsd_angstrom),
                    }
                    DetailRow {
                        label: "Motif residues:",
                        value: details.motif_residues.clone(),
                    }
                    DetailRow {
                        label: "Original structure PDB ID:",
                        value: details.parent_pdb_id.clone(),
                    }
                }
            }
            div {
                id: "{slot_key.element_id()}",
                class: "viewer-slot viewer-slot-large",
            }
        }
    }
}

#[component]
fn DetailRow(label: &'static str, value: String) -> Element {
    rsx! {
        tr {
            td { class: "detail-label", "{label}" }
            td { "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use glycomotif::session::SlotKey;

    use super::DETAIL_GROUP;

    #[test]
    fn placeholder_id_comes_from_the_slot_key() {
        let key = SlotKey::new(DETAIL_GROUP, "AF_AFO25142F1");
        assert_eq!(key.element_id(), "slot-detail-AF_AFO25142F1");
    }
}
