//! TOML run descriptions.
//!
//! A run description names the ion, the target layers and optionally a
//! `[trim]` and/or `[sr]` section. Element tables keep file order, which is
//! the order elements appear in the generated input files.
//!
//! ```
//! use srim_input::config::RunDescription;
//!
//! let run: RunDescription = r#"
//!     [ion]
//!     element = "Ni"
//!     energy = 3.0e6
//!
//!     [[layers]]
//!     formula = "SiC"
//!     density = 3.21
//!     width = 10000.0
//!
//!     [trim]
//!     number_ions = 100
//! "#
//! .parse()?;
//!
//! let trim = run.trim()?;
//! assert_eq!(trim.target().element_count(), 2);
//! # Ok::<(), srim_input::config::Error>(())
//! ```

mod error;
mod schema;

pub use error::Error;
pub use schema::{ElementKey, ElementTable, IonSection, LayerSection, SrSection, TrimSection};

use std::path::Path;
use std::str::FromStr;

use crate::model::{Ion, Layer, Target};
use crate::run::{AutoTrim, Sr, Trim};

/// A parsed, not yet validated, run description.
#[derive(Debug, Clone)]
pub struct RunDescription {
    sections: schema::RunSections,
}

impl RunDescription {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded run description from {}", path.display());
        text.parse()
    }

    pub fn ion(&self) -> Result<Ion, Error> {
        let section = &self.sections.ion;
        let ion = Ion::new(section.element.clone(), section.energy)?;
        Ok(match section.mass {
            Some(mass) => ion.with_mass(mass)?,
            None => ion,
        })
    }

    /// Builds every layer in file order.
    pub fn layers(&self) -> Result<Vec<Layer>, Error> {
        self.sections
            .layers
            .iter()
            .enumerate()
            .map(|(index, section)| build_layer(index, section))
            .collect()
    }

    pub fn target(&self) -> Result<Target, Error> {
        if self.sections.layers.is_empty() {
            return Err(Error::Incomplete("no [[layers]] given".into()));
        }
        Ok(Target::new(self.layers()?)?)
    }

    pub fn has_trim(&self) -> bool {
        self.sections.trim.is_some()
    }

    pub fn has_sr(&self) -> bool {
        self.sections.sr.is_some()
    }

    /// Builds the validated TRIM run from the `[trim]` section.
    pub fn trim(&self) -> Result<Trim, Error> {
        let section = self
            .sections
            .trim
            .as_ref()
            .ok_or_else(|| Error::Incomplete("missing [trim] section".into()))?;
        Ok(Trim::new(
            self.ion()?,
            self.target()?,
            section.number_ions,
            section.calculation,
            section.settings.clone(),
        )?)
    }

    /// TRIMAUTO mode from the `[trim]` section, unattended when absent.
    pub fn autotrim(&self) -> AutoTrim {
        self.sections
            .trim
            .as_ref()
            .map(|section| section.autotrim)
            .unwrap_or_default()
    }

    /// Builds the validated SR run from the `[sr]` section.
    pub fn sr(&self) -> Result<Sr, Error> {
        let section = self
            .sections
            .sr
            .as_ref()
            .ok_or_else(|| Error::Incomplete("missing [sr] section".into()))?;
        let layer_section = self.sections.layers.get(section.layer).ok_or_else(|| {
            Error::Incomplete(format!(
                "[sr] refers to layer {} but only {} layer(s) are given",
                section.layer,
                self.sections.layers.len()
            ))
        })?;
        let layer = build_layer(section.layer, layer_section)?;
        Ok(Sr::new(self.ion()?, layer, section.settings.clone())?)
    }
}

impl FromStr for RunDescription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            sections: toml::from_str(s)?,
        })
    }
}

fn build_layer(index: usize, section: &LayerSection) -> Result<Layer, Error> {
    let layer = match (&section.formula, &section.elements) {
        (Some(formula), None) => {
            Layer::from_formula(formula, section.density, section.width, section.phase)?
        }
        (None, Some(table)) => Layer::new(
            table.0.iter().map(|(key, spec)| (key.as_str(), spec.clone())),
            section.density,
            section.width,
            section.phase,
        )?,
        (Some(_), Some(_)) => {
            return Err(Error::invalid_layer(
                index,
                "give either `formula` or `elements`, not both",
            ));
        }
        (None, None) => {
            return Err(Error::invalid_layer(
                index,
                "needs a `formula` or an `elements` table",
            ));
        }
    };

    let layer = match &section.name {
        Some(name) => layer.with_name(name.as_str())?,
        None => layer,
    };
    Ok(match section.bragg_correction {
        Some(correction) => layer.with_bragg_correction(correction),
        None => layer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CompositionSpec, Element, Phase};
    use crate::run::CalculationMode;

    const SAMPLE: &str = include_str!("../../demos/ni_on_steel.toml");

    #[test]
    fn parses_sample_description() {
        let run: RunDescription = SAMPLE.parse().unwrap();
        assert!(run.has_trim());
        assert!(run.has_sr());

        let ion = run.ion().unwrap();
        assert_eq!(ion.element(), Element::Ni);
        assert_eq!(ion.energy(), 3.0e6);

        let layers = run.layers().unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].name(), "oxide");
        let order: Vec<_> = layers[1].elements().iter().map(|e| e.element).collect();
        assert_eq!(order, vec![Element::Fe, Element::Cr, Element::Ni]);
        assert_eq!(layers[1].get(Element::Cr).unwrap().displacement, 40.0);
        assert_eq!(layers[1].get(Element::Ni).unwrap().surface, 4.0);
        assert_eq!(layers[1].bragg_correction(), 0.98);

        let trim = run.trim().unwrap();
        assert_eq!(trim.calculation(), CalculationMode::FullCascade);
        assert_eq!(trim.settings().collisions, 1);
        assert_eq!(run.autotrim(), AutoTrim::Unattended);

        let sr = run.sr().unwrap();
        assert_eq!(sr.layer().len(), 3);
        assert_eq!(sr.settings().output_type, 7);
    }

    #[test]
    fn element_table_accepts_all_shapes_in_order() {
        let run: RunDescription = r#"
            [ion]
            element = 2
            energy = 1.0e6

            [[layers]]
            density = 1.0
            width = 10.0
            phase = 1
            [layers.elements]
            O = 1
            H = [2.0, 10.0]
            26 = { stoich = 1.0, E_d = 40.0 }
        "#
        .parse()
        .unwrap();

        assert_eq!(run.ion().unwrap().element(), Element::He);
        let layer = &run.layers().unwrap()[0];
        assert_eq!(layer.phase(), Phase::Gas);
        let order: Vec<_> = layer.elements().iter().map(|e| e.element).collect();
        assert_eq!(order, vec![Element::O, Element::H, Element::Fe]);
        assert!((layer.get(Element::H).unwrap().stoich - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_sections_are_reported() {
        let run: RunDescription = "[ion]\nelement = \"H\"\nenergy = 1.0e5\n".parse().unwrap();
        assert!(matches!(run.trim(), Err(Error::Incomplete(_))));
        assert!(matches!(run.sr(), Err(Error::Incomplete(_))));
        assert!(matches!(run.target(), Err(Error::Incomplete(_))));
        assert_eq!(run.autotrim(), AutoTrim::Unattended);
    }

    #[test]
    fn ambiguous_layers_are_rejected() {
        let both = r#"
            [ion]
            element = "H"
            energy = 1.0e5
            [[layers]]
            formula = "Si"
            density = 2.33
            width = 10.0
            [layers.elements]
            Si = 1.0
        "#;
        let run: RunDescription = both.parse().unwrap();
        assert!(matches!(
            run.layers(),
            Err(Error::InvalidLayer { index: 0, .. })
        ));

        let neither = "[ion]\nelement = \"H\"\nenergy = 1.0\n[[layers]]\ndensity = 1.0\nwidth = 1.0\n";
        let run: RunDescription = neither.parse().unwrap();
        assert!(matches!(run.layers(), Err(Error::InvalidLayer { .. })));
    }

    #[test]
    fn model_errors_pass_through() {
        let run: RunDescription = r#"
            [ion]
            element = "H"
            energy = 1.0e5
            [[layers]]
            formula = "SiSi"
            density = 2.33
            width = 10.0
        "#
        .parse()
        .unwrap();
        assert!(matches!(
            run.layers(),
            Err(Error::Model(crate::model::Error::DuplicateElement(Element::Si)))
        ));
    }

    #[test]
    fn layer_names_with_quotes_are_rejected() {
        let run: RunDescription = r#"
            [ion]
            element = "H"
            energy = 1.0e5
            [[layers]]
            formula = "Si"
            density = 2.33
            width = 10.0
            name = 'bad "name"'
        "#
        .parse()
        .unwrap();
        assert!(matches!(
            run.layers(),
            Err(Error::Model(crate::model::Error::Validation { field: "layer name", .. }))
        ));
    }

    #[test]
    fn bad_toml_shapes_fail_to_parse() {
        let bad_phase = "[ion]\nelement = \"H\"\nenergy = 1.0\n[[layers]]\nformula = \"Si\"\ndensity = 1.0\nwidth = 1.0\nphase = 3\n";
        assert!(matches!(bad_phase.parse::<RunDescription>(), Err(Error::Parse(_))));

        let misspelled_energy = "[ion]\nelement = \"H\"\nenergy = 1.0\n[[layers]]\ndensity = 1.0\nwidth = 1.0\n[layers.elements]\nFe = { stoich = 1.0, Ed = 40.0 }\n";
        assert!(matches!(misspelled_energy.parse::<RunDescription>(), Err(Error::Parse(_))));

        let unknown_field = "[ion]\nelement = \"H\"\nenergy = 1.0\nspin = 1\n";
        assert!(matches!(unknown_field.parse::<RunDescription>(), Err(Error::Parse(_))));
    }

    #[test]
    fn element_table_deserializes_in_order() {
        let table: ElementTable = toml::from_str("Zr = 1.0\nAl = [1.0]\n").unwrap();
        assert_eq!(
            table.0,
            vec![
                ("Zr".to_string(), CompositionSpec::Fraction(1.0)),
                ("Al".to_string(), CompositionSpec::List(vec![1.0])),
            ]
        );
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunDescription::from_path(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }
}
