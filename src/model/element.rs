//! The element registry.
//!
//! [`Element`] covers hydrogen through uranium, the range of targets and
//! projectiles SRIM can model. Identity is the atomic symbol; the registry is
//! `const` data and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use super::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
    Fr,
    Ra,
    Ac,
    Th,
    Pa,
    U = 92,
}

impl Element {
    /// Every element in the registry, ordered by atomic number.
    pub const ALL: [Element; 92] = [
        Element::H, Element::He, Element::Li, Element::Be, Element::B, Element::C, Element::N,
        Element::O, Element::F, Element::Ne, Element::Na, Element::Mg, Element::Al, Element::Si,
        Element::P, Element::S, Element::Cl, Element::Ar, Element::K, Element::Ca, Element::Sc,
        Element::Ti, Element::V, Element::Cr, Element::Mn, Element::Fe, Element::Co,
        Element::Ni, Element::Cu, Element::Zn, Element::Ga, Element::Ge, Element::As,
        Element::Se, Element::Br, Element::Kr, Element::Rb, Element::Sr, Element::Y,
        Element::Zr, Element::Nb, Element::Mo, Element::Tc, Element::Ru, Element::Rh,
        Element::Pd, Element::Ag, Element::Cd, Element::In, Element::Sn, Element::Sb,
        Element::Te, Element::I, Element::Xe, Element::Cs, Element::Ba, Element::La,
        Element::Ce, Element::Pr, Element::Nd, Element::Pm, Element::Sm, Element::Eu,
        Element::Gd, Element::Tb, Element::Dy, Element::Ho, Element::Er, Element::Tm,
        Element::Yb, Element::Lu, Element::Hf, Element::Ta, Element::W, Element::Re,
        Element::Os, Element::Ir, Element::Pt, Element::Au, Element::Hg, Element::Tl,
        Element::Pb, Element::Bi, Element::Po, Element::At, Element::Rn, Element::Fr,
        Element::Ra, Element::Ac, Element::Th, Element::Pa, Element::U,
    ];

    /// Resolves any accepted identifier (symbol, atomic number or an existing
    /// element) to its canonical [`Element`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownElement`] when the identifier names no element
    /// in the registry.
    pub fn lookup(id: impl Into<ElementId>) -> Result<Element, Error> {
        match id.into() {
            ElementId::Element(element) => Ok(element),
            ElementId::Symbol(symbol) => symbol.parse(),
            ElementId::Number(z) => Element::try_from(z),
        }
    }

    pub fn atomic_mass(&self) -> f64 {
        match self {
            Element::H => 1.008,
            Element::He => 4.0026,
            Element::Li => 6.94,
            Element::Be => 9.0122,
            Element::B => 10.81,
            Element::C => 12.011,
            Element::N => 14.007,
            Element::O => 15.999,
            Element::F => 18.998,
            Element::Ne => 20.18,
            Element::Na => 22.99,
            Element::Mg => 24.305,
            Element::Al => 26.982,
            Element::Si => 28.085,
            Element::P => 30.974,
            Element::S => 32.06,
            Element::Cl => 35.45,
            Element::Ar => 39.948,
            Element::K => 39.098,
            Element::Ca => 40.078,
            Element::Sc => 44.956,
            Element::Ti => 47.867,
            Element::V => 50.942,
            Element::Cr => 51.996,
            Element::Mn => 54.938,
            Element::Fe => 55.845,
            Element::Co => 58.933,
            Element::Ni => 58.693,
            Element::Cu => 63.546,
            Element::Zn => 65.38,
            Element::Ga => 69.723,
            Element::Ge => 72.63,
            Element::As => 74.922,
            Element::Se => 78.971,
            Element::Br => 79.904,
            Element::Kr => 83.798,
            Element::Rb => 85.468,
            Element::Sr => 87.62,
            Element::Y => 88.906,
            Element::Zr => 91.224,
            Element::Nb => 92.906,
            Element::Mo => 95.96,
            Element::Tc => 98.0,
            Element::Ru => 101.07,
            Element::Rh => 102.91,
            Element::Pd => 106.42,
            Element::Ag => 107.87,
            Element::Cd => 112.41,
            Element::In => 114.82,
            Element::Sn => 118.71,
            Element::Sb => 121.76,
            Element::Te => 127.6,
            Element::I => 126.9,
            Element::Xe => 131.29,
            Element::Cs => 132.91,
            Element::Ba => 137.33,
            Element::La => 138.91,
            Element::Ce => 140.12,
            Element::Pr => 140.91,
            Element::Nd => 144.24,
            Element::Pm => 145.0,
            Element::Sm => 150.36,
            Element::Eu => 151.96,
            Element::Gd => 157.25,
            Element::Tb => 158.93,
            Element::Dy => 162.5,
            Element::Ho => 164.93,
            Element::Er => 167.26,
            Element::Tm => 168.93,
            Element::Yb => 173.05,
            Element::Lu => 174.97,
            Element::Hf => 178.49,
            Element::Ta => 180.95,
            Element::W => 183.84,
            Element::Re => 186.21,
            Element::Os => 190.23,
            Element::Ir => 192.22,
            Element::Pt => 195.08,
            Element::Au => 196.97,
            Element::Hg => 200.59,
            Element::Tl => 204.38,
            Element::Pb => 207.2,
            Element::Bi => 208.98,
            Element::Po => 209.0,
            Element::At => 210.0,
            Element::Rn => 222.0,
            Element::Fr => 223.0,
            Element::Ra => 226.0,
            Element::Ac => 227.0,
            Element::Th => 232.04,
            Element::Pa => 231.04,
            Element::U => 238.03,
        }
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::Be => "Be",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Sc => "Sc",
            Element::Ti => "Ti",
            Element::V => "V",
            Element::Cr => "Cr",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Co => "Co",
            Element::Ni => "Ni",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Ga => "Ga",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Kr => "Kr",
            Element::Rb => "Rb",
            Element::Sr => "Sr",
            Element::Y => "Y",
            Element::Zr => "Zr",
            Element::Nb => "Nb",
            Element::Mo => "Mo",
            Element::Tc => "Tc",
            Element::Ru => "Ru",
            Element::Rh => "Rh",
            Element::Pd => "Pd",
            Element::Ag => "Ag",
            Element::Cd => "Cd",
            Element::In => "In",
            Element::Sn => "Sn",
            Element::Sb => "Sb",
            Element::Te => "Te",
            Element::I => "I",
            Element::Xe => "Xe",
            Element::Cs => "Cs",
            Element::Ba => "Ba",
            Element::La => "La",
            Element::Ce => "Ce",
            Element::Pr => "Pr",
            Element::Nd => "Nd",
            Element::Pm => "Pm",
            Element::Sm => "Sm",
            Element::Eu => "Eu",
            Element::Gd => "Gd",
            Element::Tb => "Tb",
            Element::Dy => "Dy",
            Element::Ho => "Ho",
            Element::Er => "Er",
            Element::Tm => "Tm",
            Element::Yb => "Yb",
            Element::Lu => "Lu",
            Element::Hf => "Hf",
            Element::Ta => "Ta",
            Element::W => "W",
            Element::Re => "Re",
            Element::Os => "Os",
            Element::Ir => "Ir",
            Element::Pt => "Pt",
            Element::Au => "Au",
            Element::Hg => "Hg",
            Element::Tl => "Tl",
            Element::Pb => "Pb",
            Element::Bi => "Bi",
            Element::Po => "Po",
            Element::At => "At",
            Element::Rn => "Rn",
            Element::Fr => "Fr",
            Element::Ra => "Ra",
            Element::Ac => "Ac",
            Element::Th => "Th",
            Element::Pa => "Pa",
            Element::U => "U",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Element::H => "Hydrogen",
            Element::He => "Helium",
            Element::Li => "Lithium",
            Element::Be => "Beryllium",
            Element::B => "Boron",
            Element::C => "Carbon",
            Element::N => "Nitrogen",
            Element::O => "Oxygen",
            Element::F => "Fluorine",
            Element::Ne => "Neon",
            Element::Na => "Sodium",
            Element::Mg => "Magnesium",
            Element::Al => "Aluminum",
            Element::Si => "Silicon",
            Element::P => "Phosphorus",
            Element::S => "Sulfur",
            Element::Cl => "Chlorine",
            Element::Ar => "Argon",
            Element::K => "Potassium",
            Element::Ca => "Calcium",
            Element::Sc => "Scandium",
            Element::Ti => "Titanium",
            Element::V => "Vanadium",
            Element::Cr => "Chromium",
            Element::Mn => "Manganese",
            Element::Fe => "Iron",
            Element::Co => "Cobalt",
            Element::Ni => "Nickel",
            Element::Cu => "Copper",
            Element::Zn => "Zinc",
            Element::Ga => "Gallium",
            Element::Ge => "Germanium",
            Element::As => "Arsenic",
            Element::Se => "Selenium",
            Element::Br => "Bromine",
            Element::Kr => "Krypton",
            Element::Rb => "Rubidium",
            Element::Sr => "Strontium",
            Element::Y => "Yttrium",
            Element::Zr => "Zirconium",
            Element::Nb => "Niobium",
            Element::Mo => "Molybdenum",
            Element::Tc => "Technetium",
            Element::Ru => "Ruthenium",
            Element::Rh => "Rhodium",
            Element::Pd => "Palladium",
            Element::Ag => "Silver",
            Element::Cd => "Cadmium",
            Element::In => "Indium",
            Element::Sn => "Tin",
            Element::Sb => "Antimony",
            Element::Te => "Tellurium",
            Element::I => "Iodine",
            Element::Xe => "Xenon",
            Element::Cs => "Cesium",
            Element::Ba => "Barium",
            Element::La => "Lanthanum",
            Element::Ce => "Cerium",
            Element::Pr => "Praseodymium",
            Element::Nd => "Neodymium",
            Element::Pm => "Promethium",
            Element::Sm => "Samarium",
            Element::Eu => "Europium",
            Element::Gd => "Gadolinium",
            Element::Tb => "Terbium",
            Element::Dy => "Dysprosium",
            Element::Ho => "Holmium",
            Element::Er => "Erbium",
            Element::Tm => "Thulium",
            Element::Yb => "Ytterbium",
            Element::Lu => "Lutetium",
            Element::Hf => "Hafnium",
            Element::Ta => "Tantalum",
            Element::W => "Tungsten",
            Element::Re => "Rhenium",
            Element::Os => "Osmium",
            Element::Ir => "Iridium",
            Element::Pt => "Platinum",
            Element::Au => "Gold",
            Element::Hg => "Mercury",
            Element::Tl => "Thallium",
            Element::Pb => "Lead",
            Element::Bi => "Bismuth",
            Element::Po => "Polonium",
            Element::At => "Astatine",
            Element::Rn => "Radon",
            Element::Fr => "Francium",
            Element::Ra => "Radium",
            Element::Ac => "Actinium",
            Element::Th => "Thorium",
            Element::Pa => "Protactinium",
            Element::U => "Uranium",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .iter()
            .copied()
            .find(|element| element.symbol() == s)
            .ok_or_else(|| Error::UnknownElement(s.to_string()))
    }
}

impl TryFrom<u8> for Element {
    type Error = Error;

    fn try_from(z: u8) -> Result<Self, Self::Error> {
        match z {
            1..=92 => Ok(Element::ALL[usize::from(z) - 1]),
            _ => Err(Error::UnknownElement(format!("Z={z}"))),
        }
    }
}

/// The ways a caller may name an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementId {
    Symbol(String),
    Number(u8),
    Element(Element),
}

impl From<Element> for ElementId {
    fn from(element: Element) -> Self {
        ElementId::Element(element)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| ElementId::Symbol(s.to_string()))
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        ElementId::from(s.as_str())
    }
}

impl From<u8> for ElementId {
    fn from(z: u8) -> Self {
        ElementId::Number(z)
    }
}

impl FromStr for ElementId {
    type Err = Error;

    /// All-digit strings are atomic numbers; anything else is kept as a symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u8>()
                .map(ElementId::Number)
                .map_err(|_| Error::UnknownElement(format!("Z={s}")))
        } else {
            Ok(ElementId::Symbol(s.to_string()))
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Symbol(s) => f.write_str(s),
            ElementId::Number(z) => write!(f, "Z={z}"),
            ElementId::Element(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("He").unwrap(), Element::He);
        assert_eq!(Element::from_str("Fe").unwrap(), Element::Fe);
        assert_eq!(Element::from_str("U").unwrap(), Element::U);
    }

    #[test]
    fn element_from_str_is_case_sensitive() {
        let err = Element::from_str("au").unwrap_err();
        assert_eq!(err.to_string(), "unknown element identifier: 'au'");
    }

    #[test]
    fn elements_beyond_uranium_are_unknown() {
        assert!(Element::from_str("Pu").is_err());
        assert!(Element::try_from(93).is_err());
        assert!(Element::try_from(0).is_err());
    }

    #[test]
    fn registry_is_ordered_by_atomic_number() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(usize::from(element.atomic_number()), i + 1);
            assert_eq!(Element::from_str(element.symbol()).unwrap(), *element);
        }
    }

    #[test]
    fn lookup_accepts_every_identifier_form() {
        assert_eq!(Element::lookup("Au").unwrap(), Element::Au);
        assert_eq!(Element::lookup(79u8).unwrap(), Element::Au);
        assert_eq!(Element::lookup("79").unwrap(), Element::Au);
        assert_eq!(Element::lookup(Element::Au).unwrap(), Element::Au);
        assert_eq!(Element::lookup("Au").unwrap(), Element::lookup("Au").unwrap());
    }

    #[test]
    fn lookup_rejects_unknown_identifiers() {
        assert!(matches!(Element::lookup("Xx"), Err(Error::UnknownElement(_))));
        assert!(matches!(Element::lookup(200u8), Err(Error::UnknownElement(_))));
        assert!(matches!(Element::lookup("300"), Err(Error::UnknownElement(_))));
    }

    #[test]
    fn element_symbol_name_and_mass() {
        let el = Element::Na;
        assert_eq!(el.symbol(), "Na");
        assert_eq!(el.to_string(), "Na");
        assert_eq!(el.name(), "Sodium");
        assert_eq!(el.atomic_number(), 11u8);
        assert!(approx_eq(Element::Fe.atomic_mass(), 55.845, 1e-6));
        assert!(approx_eq(Element::Au.atomic_mass(), 196.97, 1e-6));
        assert!(approx_eq(Element::U.atomic_mass(), 238.03, 1e-6));
    }
}
