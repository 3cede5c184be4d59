//! Built-in sugar and search-result tables.
//!
//! The six monosaccharides below are the ones the motif search pipeline was
//! run against; abbreviations follow the PDB chemical component dictionary.

use serde::{Deserialize, Serialize};

use crate::error::GlycomotifError;

/// One sugar type shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SugarInfo {
    /// Full chemical name, e.g. "α-L-fucopyranose".
    pub name: String,
    /// PDB chemical component abbreviation, e.g. "FUC".
    pub abbrev: String,
    /// Asset path of the card image.
    pub image: String,
}

/// One computed-model hit in a sugar's search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Protein title as reported by the model archive.
    pub title: String,
    /// AlphaFold DB identifier, e.g. "AF-O25142-F1".
    pub af_id: String,
    /// UniProtKB accession, e.g. "O25142".
    pub uniprot_id: String,
    /// Asset path of the thumbnail image.
    pub image: String,
}

/// Detail-page metadata for one result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotifDetails {
    /// Global pLDDT of the model.
    pub plddt_global: f64,
    /// Source organism.
    pub organism: String,
    /// Total number of motifs found in this model.
    pub motif_count: u32,
    /// RMSD against the representative motif, in Ångström.
    pub rmsd_angstrom: f64,
    /// Motif residues, e.g. "TRP: A-7, GLN: A-9, VAL: A-10".
    pub motif_residues: String,
    /// PDB id of the experimental structure the motif was derived from.
    pub parent_pdb_id: String,
}

fn sugar(name: &str, abbrev: &str, image: &str) -> SugarInfo {
    SugarInfo {
        name: name.to_owned(),
        abbrev: abbrev.to_owned(),
        image: image.to_owned(),
    }
}

/// The built-in sugar table shown on the home page.
#[must_use]
pub fn builtin_sugars() -> Vec<SugarInfo> {
    vec![
        sugar("α-L-fucopyranose", "FUC", "assets/fuc_spin.gif"),
        sugar("β-L-fucopyranose", "FUL", "assets/fuc_spin.gif"),
        sugar("α-D-mannopyranose", "MAN", "assets/fuc_spin.gif"),
        sugar("β-D-galactopyranose", "GAL", "assets/fuc_spin.gif"),
        sugar("α-D-glucopyranose", "GLC", "assets/fuc_spin.gif"),
        sugar("N-acetyl-α-D-neuraminic acid", "SIA", "assets/fuc_spin.gif"),
    ]
}

/// The built-in search results.
///
/// The "Computed model of" prefix RCSB adds to titles is stripped; note the
/// uncharacterized protein has a different name in AFDB than in RCSB.
#[must_use]
pub fn builtin_results() -> Vec<ResultInfo> {
    vec![
        ResultInfo {
            title: "Alpha-(1,3)-fucosyltransferase".to_owned(),
            af_id: "AF-O25142-F1".to_owned(),
            uniprot_id: "O25142".to_owned(),
            image: "assets/fucosyltransferase.jpeg".to_owned(),
        },
        ResultInfo {
            title: "Thioredoxin domain-containing protein".to_owned(),
            af_id: "AF-A0A0K0EH67-F1".to_owned(),
            uniprot_id: "A0A0K0EH67".to_owned(),
            image: "assets/domain-containing.jpeg".to_owned(),
        },
        ResultInfo {
            title: "Lectin".to_owned(),
            af_id: "AF-P86993-F1".to_owned(),
            uniprot_id: "P86993".to_owned(),
            image: "assets/lectin.jpeg".to_owned(),
        },
    ]
}

/// Look up a sugar by its PDB abbreviation.
///
/// # Errors
/// [`GlycomotifError::NotFound`] if no sugar carries the abbreviation.
pub fn sugar_by_abbrev(abbrev: &str) -> Result<SugarInfo, GlycomotifError> {
    builtin_sugars()
        .into_iter()
        .find(|s| s.abbrev == abbrev)
        .ok_or_else(|| GlycomotifError::NotFound(format!("sugar {abbrev}")))
}

/// Look up a search result by its AlphaFold DB identifier.
///
/// # Errors
/// [`GlycomotifError::NotFound`] if no result carries the id.
pub fn result_by_af_id(af_id: &str) -> Result<ResultInfo, GlycomotifError> {
    builtin_results()
        .into_iter()
        .find(|r| r.af_id == af_id)
        .ok_or_else(|| GlycomotifError::NotFound(format!("result {af_id}")))
}

/// Map an AlphaFold DB identifier to the id RCSB serves the computed model
/// under: `AF-O25142-F1` → `AF_AFO25142F1`.
#[must_use]
pub fn rcsb_model_id(af_id: &str) -> String {
    af_id.replacen("AF-", "AF_AF", 1).replace("-F", "F")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sugar_lookup() {
        assert_eq!(sugar_by_abbrev("FUC").unwrap().name, "α-L-fucopyranose");
        assert!(matches!(
            sugar_by_abbrev("XYL"),
            Err(GlycomotifError::NotFound(_))
        ));
    }

    #[test]
    fn result_lookup() {
        let r = result_by_af_id("AF-O25142-F1").unwrap();
        assert_eq!(r.uniprot_id, "O25142");
        assert!(result_by_af_id("AF-MISSING-F1").is_err());
    }

    #[test]
    fn rcsb_id_mapping() {
        assert_eq!(rcsb_model_id("AF-O25142-F1"), "AF_AFO25142F1");
        assert_eq!(rcsb_model_id("AF-A0A0K0EH67-F1"), "AF_AFA0A0K0EH67F1");
    }

    #[test]
    fn abbreviations_are_unique() {
        let sugars = builtin_sugars();
        for (i, a) in sugars.iter().enumerate() {
            for b in &sugars[i + 1..] {
                assert_ne!(a.abbrev, b.abbrev);
            }
        }
    }
}
