//! Declarative molecular view specifications (MolViewSpec).
//!
//! A [`ViewSpec`] describes one structure for the external Molstar viewer:
//! where to download it from, how to parse it, and a single
//! model/component/representation/color chain. Construction is pure data
//! assembly through [`ViewSpecBuilder`]; the finished value serializes to
//! single-state MVSJ and is consumed exactly once by the viewer's loader.
//!
//! Output is deliberately deterministic (fixed metadata version, no
//! timestamps) so identical inputs always produce identical MVSJ text.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::options::SourceOptions;

/// Structure file format tag understood by the external parser.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ParseFormat {
    /// BinaryCIF, the format the model archive serves.
    #[default]
    Bcif,
    /// Text mmCIF.
    Mmcif,
    /// Legacy PDB.
    Pdb,
}

impl ParseFormat {
    /// Wire tag of the format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bcif => "bcif",
            Self::Mmcif => "mmcif",
            Self::Pdb => "pdb",
        }
    }

    /// File extension used when deriving download URLs.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Bcif => "bcif",
            Self::Mmcif => "cif",
            Self::Pdb => "pdb",
        }
    }
}

/// Representation style for the single representation directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Default cartoon representation.
    #[default]
    Cartoon,
    /// Ball-and-stick.
    BallAndStick,
    /// Molecular surface.
    Surface,
}

impl Representation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Cartoon => "cartoon",
            Self::BallAndStick => "ball_and_stick",
            Self::Surface => "surface",
        }
    }
}

/// One node of the MVSJ tree: a kind tag, parameters, and children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Node kind tag, e.g. `"download"` or `"color"`.
    pub kind: &'static str,
    /// Node parameters; omitted from the wire form when empty.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub params: Map<String, Value>,
    /// Child nodes; omitted from the wire form when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    fn new(kind: &'static str) -> Self {
        Self {
            kind,
            params: Map::new(),
            children: Vec::new(),
        }
    }

    fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        let _ = self.params.insert(key.to_owned(), value.into());
        self
    }
}

/// Fixed MVSJ metadata header. No timestamp: output must be reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct SpecMetadata {
    version: &'static str,
}

/// A finalized molecular view specification.
///
/// Immutable after construction; hand it to the external loader once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSpec {
    metadata: SpecMetadata,
    root: Node,
}

impl ViewSpec {
    /// Serialize to MVSJ text for `MVSData.fromMVSJ`.
    ///
    /// # Errors
    /// Never fails in practice; the error type exists because serde_json's
    /// serializer is fallible.
    pub fn to_mvsj(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The root of the node tree (download node under the implicit root).
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Walk the single chain from the root down, collecting kind tags.
    #[must_use]
    pub fn chain_kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        let mut node = Some(&self.root);
        while let Some(n) = node {
            kinds.push(n.kind);
            node = n.children.first();
        }
        kinds
    }
}

/// Fluent builder for [`ViewSpec`].
///
/// Mirrors the external builder contract: set a download source and parse
/// format, then one model/component/representation/color chain, then
/// finalize. Every step has a default, so `ViewSpecBuilder::new(url)` plus
/// [`build`](Self::build) already yields a loadable specification.
#[derive(Debug, Clone)]
pub struct ViewSpecBuilder {
    url: String,
    format: ParseFormat,
    selector: String,
    representation: Representation,
    color: String,
}

impl ViewSpecBuilder {
    /// Start a builder for the structure at `url`.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: ParseFormat::default(),
            selector: "all".to_owned(),
            representation: Representation::default(),
            color: "blue".to_owned(),
        }
    }

    /// Set the parse format tag.
    #[must_use]
    pub fn parse(mut self, format: ParseFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the component selector (default `"all"`, the whole structure).
    #[must_use]
    pub fn component(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Set the representation style.
    #[must_use]
    pub fn representation(mut self, repr: Representation) -> Self {
        self.representation = repr;
        self
    }

    /// Set the uniform color directive.
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Finalize into an immutable [`ViewSpec`].
    ///
    /// The chain is always exactly: download → parse → structure (model) →
    /// component → representation → color.
    #[must_use]
    pub fn build(self) -> ViewSpec {
        let color = Node::new("color").param("color", self.color);
        let mut representation = Node::new("representation")
            .param("type", self.representation.as_str());
        representation.children.push(color);
        let mut component =
            Node::new("component").param("selector", self.selector);
        component.children.push(representation);
        let mut structure = Node::new("structure").param("type", "model");
        structure.children.push(component);
        let mut parse = Node::new("parse").param("format", self.format.as_str());
        parse.children.push(structure);
        let mut download = Node::new("download").param("url", self.url);
        download.children.push(parse);
        ViewSpec {
            metadata: SpecMetadata { version: "1" },
            root: download,
        }
    }
}

/// Canonical lowercase source identifier for an item id.
///
/// The model archive serves computed models under lowercased ids, e.g.
/// `AF_AFO25142F1` → `af_afo25142f1`.
#[must_use]
pub fn source_id(item_id: &str) -> String {
    item_id.to_lowercase()
}

/// Download URL for an item id under the configured structure source.
#[must_use]
pub fn structure_url(item_id: &str, opts: &SourceOptions) -> String {
    format!(
        "{}/{}.{}",
        opts.base_url.trim_end_matches('/'),
        source_id(item_id),
        opts.format.extension()
    )
}

/// The fixed default specification for one item: whole structure, default
/// representation, single uniform color. This is what slot activation loads.
#[must_use]
pub fn default_spec(item_id: &str, opts: &SourceOptions) -> ViewSpec {
    ViewSpecBuilder::new(structure_url(item_id, opts))
        .parse(opts.format)
        .color(opts.default_color.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_id_is_lowercase() {
        assert_eq!(source_id("AF_AFO25142F1"), "af_afo25142f1");
    }

    #[test]
    fn structure_url_uses_base_and_extension() {
        let opts = SourceOptions::default();
        assert_eq!(
            structure_url("AF_AFO25142F1", &opts),
            "https://models.rcsb.org/af_afo25142f1.bcif"
        );
    }

    #[test]
    fn default_spec_has_exactly_one_chain() {
        let spec = default_spec("AF_AFO25142F1", &SourceOptions::default());
        assert_eq!(
            spec.chain_kinds(),
            vec![
                "download",
                "parse",
                "structure",
                "component",
                "representation",
                "color"
            ]
        );
        // Single chain: every node has at most one child.
        let mut node = Some(spec.root());
        while let Some(n) = node {
            assert!(n.children.len() <= 1);
            node = n.children.first();
        }
    }

    #[test]
    fn default_spec_color_and_format_are_fixed() {
        let spec = default_spec("AF_AFO25142F1", &SourceOptions::default());
        let mvsj = spec.to_mvsj().unwrap();
        let value: Value = serde_json::from_str(&mvsj).unwrap();
        assert_eq!(value["metadata"]["version"], "1");
        assert_eq!(value["root"]["kind"], "download");
        assert_eq!(
            value["root"]["params"]["url"],
            "https://models.rcsb.org/af_afo25142f1.bcif"
        );
        let parse = &value["root"]["children"][0];
        assert_eq!(parse["params"]["format"], "bcif");
        let color = &parse["children"][0]["children"][0]["children"][0]
            ["children"][0];
        assert_eq!(color["kind"], "color");
        assert_eq!(color["params"]["color"], "blue");
    }

    #[test]
    fn builder_overrides_apply() {
        let spec = ViewSpecBuilder::new("https://example.org/x.cif")
            .parse(ParseFormat::Mmcif)
            .representation(Representation::BallAndStick)
            .component("ligand")
            .color("red")
            .build();
        let mvsj = spec.to_mvsj().unwrap();
        assert!(mvsj.contains(r#""format":"mmcif""#));
        assert!(mvsj.contains(r#""type":"ball_and_stick""#));
        assert!(mvsj.contains(r#""selector":"ligand""#));
        assert!(mvsj.contains(r#""color":"red""#));
    }
}
