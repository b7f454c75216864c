use std::fmt;

use super::element::{Element, ElementId};
use super::error::{Error, require_positive};

/// The projectile species and its kinetic energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ion {
    element: Element,
    energy: f64,
    mass: f64,
}

impl Ion {
    /// Creates an ion with `energy` in eV and the element's standard mass.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownElement`] for an unresolvable identifier,
    /// [`Error::Validation`] for a non-positive energy.
    pub fn new(id: impl Into<ElementId>, energy: f64) -> Result<Self, Error> {
        let element = Element::lookup(id)?;
        Ok(Self {
            element,
            energy: require_positive("ion energy", energy)?,
            mass: element.atomic_mass(),
        })
    }

    /// Overrides the mass in amu, e.g. for a specific isotope.
    pub fn with_mass(self, mass: f64) -> Result<Self, Error> {
        Ok(Self {
            mass: require_positive("ion mass", mass)?,
            ..self
        })
    }

    #[inline]
    pub fn element(&self) -> Element {
        self.element
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        self.element.atomic_number()
    }

    #[inline]
    pub fn symbol(&self) -> &'static str {
        self.element.symbol()
    }

    /// Energy in eV.
    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Energy in keV, the unit TRIM and SR expect.
    #[inline]
    pub fn energy_kev(&self) -> f64 {
        self.energy / 1.0e3
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }
}

impl fmt::Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Ion element:{} mass:{:.3} energy:{:.3e} eV>",
            self.element, self.mass, self.energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mass_from_registry() {
        let ion = Ion::new("Ni", 3.0e6).unwrap();
        assert_eq!(ion.element(), Element::Ni);
        assert_eq!(ion.atomic_number(), 28);
        assert_eq!(ion.mass(), Element::Ni.atomic_mass());
        assert_eq!(ion.energy_kev(), 3000.0);
    }

    #[test]
    fn mass_override() {
        let ion = Ion::new(1u8, 1.0e3).unwrap().with_mass(2.014).unwrap();
        assert_eq!(ion.symbol(), "H");
        assert_eq!(ion.mass(), 2.014);
        assert!(Ion::new("H", 1.0).unwrap().with_mass(0.0).is_err());
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Ion::new("Q", 1.0), Err(Error::UnknownElement(_))));
        assert!(matches!(
            Ion::new("He", 0.0),
            Err(Error::Validation { field: "ion energy", .. })
        ));
    }
}
