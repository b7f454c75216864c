use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::element::Element;

const DEFAULT_BINDING_TOML: &str = include_str!("../../resources/binding_energies.toml");

static DEFAULT_BINDING: OnceLock<HashMap<String, BindingEnergies>> = OnceLock::new();

/// SRIM's suggested binding energies for one element, in eV.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BindingEnergies {
    pub displacement: f64,
    pub lattice: f64,
    pub surface: f64,
}

impl BindingEnergies {
    /// The three energies in serialization order: displacement, lattice, surface.
    pub fn as_array(&self) -> [f64; 3] {
        [self.displacement, self.lattice, self.surface]
    }
}

fn table() -> &'static HashMap<String, BindingEnergies> {
    DEFAULT_BINDING.get_or_init(|| {
        toml::from_str(DEFAULT_BINDING_TOML)
            .expect("Failed to parse embedded binding energy table. This is a library bug.")
    })
}

/// Returns the default binding energies for `element`.
///
/// The table covers every element in the registry, so a miss is a defect in
/// the embedded resource rather than bad input.
pub fn defaults_for(element: Element) -> &'static BindingEnergies {
    table().get(element.symbol()).unwrap_or_else(|| {
        panic!(
            "no default binding energies for {}. This is a library bug.",
            element
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn embedded_table_covers_registry() {
        for element in Element::ALL {
            let energies = defaults_for(element);
            assert!(energies.displacement > 0.0, "{element}");
            assert!(energies.lattice >= 0.0, "{element}");
            assert!(energies.surface > 0.0, "{element}");
        }
        assert_eq!(table().len(), Element::ALL.len());
    }

    #[test]
    fn known_values() {
        let au = defaults_for(Element::Au);
        assert!(approx_eq(au.displacement, 25.0, 1e-12));
        assert!(approx_eq(au.lattice, 3.0, 1e-12));
        assert!(approx_eq(au.surface, 3.8, 1e-12));

        let si = defaults_for(Element::Si);
        assert_eq!(si.as_array(), [15.0, 2.0, 4.7]);

        let c = defaults_for(Element::C);
        assert!(approx_eq(c.surface, 7.41, 1e-12));
    }

    #[test]
    fn noble_gases_share_low_defaults() {
        for element in [Element::He, Element::Ne, Element::Ar, Element::Kr, Element::Xe] {
            assert_eq!(defaults_for(element).as_array(), [5.0, 1.0, 2.0]);
        }
    }
}
