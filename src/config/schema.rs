use serde::Deserialize;

use crate::model::{CompositionSpec, ElementId, Phase};
use crate::run::{AutoTrim, CalculationMode, SrSettings, TrimSettings};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IonSection {
    pub element: ElementKey,
    /// Energy in eV.
    pub energy: f64,
    #[serde(default)]
    pub mass: Option<f64>,
}

/// An element written either as a symbol or an atomic number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ElementKey {
    Number(u8),
    Symbol(String),
}

impl From<ElementKey> for ElementId {
    fn from(key: ElementKey) -> Self {
        match key {
            ElementKey::Number(z) => ElementId::Number(z),
            ElementKey::Symbol(s) => ElementId::from(s),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayerSection {
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub elements: Option<ElementTable>,
    pub density: f64,
    /// Width in Angstroms.
    pub width: f64,
    #[serde(default)]
    pub phase: Phase,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bragg_correction: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrimSection {
    pub number_ions: u32,
    #[serde(default)]
    pub calculation: CalculationMode,
    #[serde(default)]
    pub autotrim: AutoTrim,
    #[serde(default)]
    pub settings: TrimSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SrSection {
    /// Zero-based index into `layers`.
    #[serde(default)]
    pub layer: usize,
    #[serde(default)]
    pub settings: SrSettings,
}

/// `symbol = spec` pairs in file order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "toml::Table")]
pub struct ElementTable(pub Vec<(String, CompositionSpec)>);

impl TryFrom<toml::Table> for ElementTable {
    type Error = toml::de::Error;

    fn try_from(table: toml::Table) -> Result<Self, Self::Error> {
        table
            .into_iter()
            .map(|(key, value)| Ok((key, value.try_into::<CompositionSpec>()?)))
            .collect::<Result<Vec<_>, _>>()
            .map(ElementTable)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSections {
    pub ion: IonSection,
    #[serde(default)]
    pub layers: Vec<LayerSection>,
    #[serde(default)]
    pub trim: Option<TrimSection>,
    #[serde(default)]
    pub sr: Option<SrSection>,
}
