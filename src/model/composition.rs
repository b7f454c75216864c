use serde::Deserialize;

use super::binding::{self, BindingEnergies};
use super::element::Element;
use super::error::{Error, require_non_negative, require_positive};

/// How a caller specifies one element's share of a material.
///
/// Missing energies are filled from the default binding energy table when
/// a composition is resolved into a [`CompositionEntry`].
///
/// # Examples
///
/// ```
/// use srim_input::CompositionSpec;
///
/// let scalar = CompositionSpec::from(1.0);
/// let list = CompositionSpec::from(vec![1.0, 30.0]);
/// let record = CompositionSpec::record(1.0).displacement(30.0).surface(1.0);
/// # let _ = (scalar, list, record);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CompositionSpec {
    /// Stoichiometry only.
    Fraction(f64),
    /// `[stoich, displacement, lattice, surface]`, 1 to 4 values.
    List(Vec<f64>),
    /// Named fields, `stoich` required.
    Record(CompositionRecord),
}

/// The named-field form of a [`CompositionSpec`].
///
/// Unknown keys are rejected, so a misspelled energy never silently falls
/// back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositionRecord {
    pub stoich: f64,
    #[serde(default, rename = "E_d", alias = "displacement")]
    pub displacement: Option<f64>,
    #[serde(default)]
    pub lattice: Option<f64>,
    #[serde(default)]
    pub surface: Option<f64>,
}

impl CompositionSpec {
    /// Starts a record spec with only the stoichiometry set.
    pub fn record(stoich: f64) -> Self {
        Self::Record(CompositionRecord {
            stoich,
            displacement: None,
            lattice: None,
            surface: None,
        })
    }

    /// Sets the displacement energy of a record spec.
    ///
    /// Scalar and list specs are promoted to records first.
    pub fn displacement(self, value: f64) -> Self {
        self.into_record(|r| r.displacement = Some(value))
    }

    /// Sets the lattice binding energy of a record spec.
    pub fn lattice(self, value: f64) -> Self {
        self.into_record(|r| r.lattice = Some(value))
    }

    /// Sets the surface binding energy of a record spec.
    pub fn surface(self, value: f64) -> Self {
        self.into_record(|r| r.surface = Some(value))
    }

    fn into_record(self, set: impl FnOnce(&mut CompositionRecord)) -> Self {
        let mut record = match self {
            Self::Fraction(stoich) => CompositionRecord {
                stoich,
                displacement: None,
                lattice: None,
                surface: None,
            },
            Self::List(values) => CompositionRecord {
                stoich: values.first().copied().unwrap_or(f64::NAN),
                displacement: values.get(1).copied(),
                lattice: values.get(2).copied(),
                surface: values.get(3).copied(),
            },
            Self::Record(record) => record,
        };
        set(&mut record);
        Self::Record(record)
    }

    /// Resolves into raw (un-normalized) values for `element`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a list has no values or more than
    /// four, if the stoichiometry is not strictly positive, or if an energy
    /// is negative.
    pub fn resolve(&self, element: Element) -> Result<CompositionEntry, Error> {
        let defaults = binding::defaults_for(element);

        let (stoich, energies) = match self {
            Self::Fraction(stoich) => (*stoich, *defaults),
            Self::List(values) => {
                if values.is_empty() || values.len() > 4 {
                    return Err(Error::validation(
                        "composition",
                        format!(
                            "{element}: list must hold 1 to 4 values, got {}",
                            values.len()
                        ),
                    ));
                }
                let mut energies = defaults.as_array();
                for (slot, value) in energies.iter_mut().zip(&values[1..]) {
                    *slot = *value;
                }
                (
                    values[0],
                    BindingEnergies {
                        displacement: energies[0],
                        lattice: energies[1],
                        surface: energies[2],
                    },
                )
            }
            Self::Record(record) => (
                record.stoich,
                BindingEnergies {
                    displacement: record.displacement.unwrap_or(defaults.displacement),
                    lattice: record.lattice.unwrap_or(defaults.lattice),
                    surface: record.surface.unwrap_or(defaults.surface),
                },
            ),
        };

        Ok(CompositionEntry {
            element,
            stoich: require_positive("stoich", stoich)?,
            displacement: require_non_negative("E_d", energies.displacement)?,
            lattice: require_non_negative("lattice", energies.lattice)?,
            surface: require_non_negative("surface", energies.surface)?,
        })
    }
}

impl From<f64> for CompositionSpec {
    fn from(stoich: f64) -> Self {
        Self::Fraction(stoich)
    }
}

impl From<Vec<f64>> for CompositionSpec {
    fn from(values: Vec<f64>) -> Self {
        Self::List(values)
    }
}

impl<const N: usize> From<[f64; N]> for CompositionSpec {
    fn from(values: [f64; N]) -> Self {
        Self::List(values.to_vec())
    }
}

/// One element of a material with its resolved fraction and energies (eV).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositionEntry {
    pub element: Element,
    pub stoich: f64,
    pub displacement: f64,
    pub lattice: f64,
    pub surface: f64,
}

impl CompositionEntry {
    /// Field-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.element == other.element
            && (self.stoich - other.stoich).abs() <= tol
            && (self.displacement - other.displacement).abs() <= tol
            && (self.lattice - other.lattice).abs() <= tol
            && (self.surface - other.surface).abs() <= tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn au_defaults() -> [f64; 3] {
        binding::defaults_for(Element::Au).as_array()
    }

    fn values(entry: &CompositionEntry) -> [f64; 4] {
        [entry.stoich, entry.displacement, entry.lattice, entry.surface]
    }

    #[test]
    fn scalar_takes_all_defaults() {
        let entry = CompositionSpec::from(1.0).resolve(Element::Au).unwrap();
        let [d, l, s] = au_defaults();
        assert_eq!(values(&entry), [1.0, d, l, s]);
    }

    #[test]
    fn list_pads_each_position_with_its_own_default() {
        let [d, l, s] = au_defaults();
        let cases: [(Vec<f64>, [f64; 4]); 4] = [
            (vec![1.0], [1.0, d, l, s]),
            (vec![1.0, 30.0], [1.0, 30.0, l, s]),
            (vec![1.0, 30.0, 1.0], [1.0, 30.0, 1.0, s]),
            (vec![1.0, 30.0, 1.0, 1.0], [1.0, 30.0, 1.0, 1.0]),
        ];
        for (input, expected) in cases {
            let entry = CompositionSpec::from(input.clone())
                .resolve(Element::Au)
                .unwrap();
            assert_eq!(values(&entry), expected, "input {input:?}");
        }
    }

    #[test]
    fn list_length_outside_one_to_four_fails() {
        for input in [vec![], vec![1.0, 2.0, 3.0, 4.0, 5.0]] {
            let err = CompositionSpec::from(input).resolve(Element::Au).unwrap_err();
            assert!(matches!(err, Error::Validation { field: "composition", .. }));
        }
    }

    #[test]
    fn record_overrides_only_given_fields() {
        let [_, l, s] = au_defaults();
        let entry = CompositionSpec::record(1.0)
            .displacement(30.0)
            .resolve(Element::Au)
            .unwrap();
        assert_eq!(values(&entry), [1.0, 30.0, l, s]);

        let entry = CompositionSpec::record(1.0)
            .displacement(30.0)
            .lattice(1.0)
            .surface(1.0)
            .resolve(Element::Au)
            .unwrap();
        assert_eq!(values(&entry), [1.0, 30.0, 1.0, 1.0]);
    }

    #[test]
    fn builder_promotes_lists_to_records() {
        let spec = CompositionSpec::from(vec![2.0, 10.0]).surface(0.5);
        assert_eq!(
            spec,
            CompositionSpec::Record(CompositionRecord {
                stoich: 2.0,
                displacement: Some(10.0),
                lattice: None,
                surface: Some(0.5),
            })
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        for stoich in [0.0, -0.1, f64::NAN] {
            let err = CompositionSpec::from(stoich).resolve(Element::Au).unwrap_err();
            assert!(matches!(err, Error::Validation { field: "stoich", .. }));
        }
        let err = CompositionSpec::from([1.0, -1.0])
            .resolve(Element::Au)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "E_d", .. }));
        let err = CompositionSpec::record(1.0)
            .surface(-3.0)
            .resolve(Element::Au)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { field: "surface", .. }));
    }

    #[test]
    fn zero_energies_are_allowed() {
        let entry = CompositionSpec::from([1.0, 0.0, 0.0, 0.0])
            .resolve(Element::Fe)
            .unwrap();
        assert_eq!(values(&entry), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn deserializes_every_shape_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            a: CompositionSpec,
            b: CompositionSpec,
            c: CompositionSpec,
            d: CompositionSpec,
        }
        let doc: Doc = toml::from_str(
            r#"
            a = 0.5
            b = 2
            c = [1.0, 30.0]
            d = { stoich = 1.0, E_d = 40.0, surface = 1.5 }
            "#,
        )
        .unwrap();
        assert_eq!(doc.a, CompositionSpec::Fraction(0.5));
        assert_eq!(doc.b, CompositionSpec::Fraction(2.0));
        assert_eq!(doc.c, CompositionSpec::List(vec![1.0, 30.0]));
        assert_eq!(
            doc.d,
            CompositionSpec::record(1.0).displacement(40.0).surface(1.5)
        );
    }

    #[test]
    fn misspelled_record_keys_fail_to_deserialize() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            fe: CompositionSpec,
        }
        assert!(toml::from_str::<Doc>("fe = { stoich = 1.0, Ed = 40.0 }").is_err());
        assert!(toml::from_str::<Doc>("fe = { stoich = 1.0, displacement = 40.0 }").is_ok());
    }
}
