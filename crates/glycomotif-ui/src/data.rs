//! Embedded datasets and demo detail metadata.
//!
//! The grouped result datasets are produced offline by the motif search
//! pipeline and checked in under `assets/datasets/`; they are embedded into
//! the wasm bundle at compile time.

use glycomotif::catalog::{MotifDetails, ResultDataset};

const FUC_DATASET: &str = include_str!("../../../assets/datasets/fuc.json");

/// Grouped search results for one sugar. Only FUC has a computed dataset
/// so far; other sugars fall back to an empty dataset.
pub fn dataset_for(abbrev: &str) -> ResultDataset {
    let json = match abbrev {
        "FUC" => FUC_DATASET,
        _ => return ResultDataset::default(),
    };
    ResultDataset::from_json(json).unwrap_or_else(|e| {
        log::error!("embedded dataset for {abbrev} is malformed: {e}");
        ResultDataset::default()
    })
}

/// Detail metadata for one result.
///
/// The pipeline's per-model exports are not wired up yet, so every result
/// shows the representative FUC example values.
pub fn details_for(_af_id: &str) -> MotifDetails {
    MotifDetails {
        plddt_global: 89.94,
        organism: "Helicobacter pylori 26695".to_owned(),
        motif_count: 3,
        rmsd_angstrom: 0.1,
        motif_residues: "TRP: A-7, GLN: A-9, VAL: A-10".to_owned(),
        parent_pdb_id: "7KHU".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fuc_dataset_parses() {
        let ds = dataset_for("FUC");
        assert_eq!(ds.group_count(), 2);
        assert_eq!(ds.group_len("7KHU_FUC_A_201"), 3);
    }

    #[test]
    fn unknown_sugar_gets_empty_dataset() {
        assert_eq!(dataset_for("MAN").group_count(), 0);
    }
}
