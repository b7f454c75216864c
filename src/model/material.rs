use serde::Deserialize;
use std::fmt;

use super::composition::{CompositionEntry, CompositionSpec};
use super::element::{Element, ElementId};
use super::error::{Error, require_non_negative, require_positive};
use super::formula;

/// Absolute tolerance used by material equality.
pub const EQ_TOLERANCE: f64 = 1e-6;

/// Physical phase of a target material, as TRIM encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "u8")]
#[repr(u8)]
pub enum Phase {
    #[default]
    Solid = 0,
    Gas = 1,
}

impl Phase {
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Phase {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Phase::Solid),
            1 => Ok(Phase::Gas),
            _ => Err(Error::validation(
                "phase",
                format!("{value} must be 0 (solid) or 1 (gas)"),
            )),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Solid => write!(f, "Solid"),
            Phase::Gas => write!(f, "Gas"),
        }
    }
}

/// A normalized composition with a density and phase.
///
/// Entries keep the order in which elements were first given. Stoichiometric
/// fractions always sum to 1.0.
///
/// # Examples
///
/// ```
/// use srim_input::{CompositionSpec, Element, Material, Phase};
///
/// let sic = Material::new(
///     [
///         ("Si", CompositionSpec::record(1.0).displacement(35.0)),
///         ("C", CompositionSpec::from(1.0)),
///     ],
///     3.21,
///     Phase::Solid,
/// )?;
///
/// assert_eq!(sic.len(), 2);
/// assert!((sic.get(Element::Si).unwrap().stoich - 0.5).abs() < 1e-12);
///
/// let from_formula = Material::from_formula("SiC", 3.21, Phase::Solid)?
///     .with_displacement(Element::Si, 35.0)?;
/// assert_eq!(sic, from_formula);
/// # Ok::<(), srim_input::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Material {
    elements: Vec<CompositionEntry>,
    density: f64,
    phase: Phase,
}

impl Material {
    /// Builds a material from `(identifier, spec)` pairs.
    ///
    /// A repeated element overwrites its earlier entry in place. After all
    /// entries are resolved the fractions are divided by their sum.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownElement`] if an identifier cannot be resolved
    /// * [`Error::Validation`] for an empty composition, a non-positive
    ///   density, or any invalid composition spec
    pub fn new<I, K, S>(elements: I, density: f64, phase: Phase) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<ElementId>,
        S: Into<CompositionSpec>,
    {
        let density = require_positive("density", density)?;

        let mut entries: Vec<CompositionEntry> = Vec::new();
        for (id, spec) in elements {
            let element = Element::lookup(id)?;
            let entry = spec.into().resolve(element)?;
            match entries.iter_mut().find(|e| e.element == element) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }

        if entries.is_empty() {
            return Err(Error::validation(
                "composition",
                "a material needs at least one element",
            ));
        }

        let mut stoich_sum: f64 = entries.iter().map(|e| e.stoich).sum();
        if !stoich_sum.is_finite() {
            // Finite fractions can still overflow the sum; rescale by the largest first.
            let largest = entries.iter().map(|e| e.stoich).fold(0.0, f64::max);
            for entry in &mut entries {
                entry.stoich /= largest;
            }
            stoich_sum = entries.iter().map(|e| e.stoich).sum();
        }
        for entry in &mut entries {
            entry.stoich /= stoich_sum;
        }

        log::debug!(
            "normalized {} element(s) by stoichiometry sum {stoich_sum}",
            entries.len()
        );

        Ok(Self {
            elements: entries,
            density,
            phase,
        })
    }

    /// Builds a material from a chemical formula such as `SiC` or `Fe0.1Al.9`.
    ///
    /// Every element takes the default binding energies.
    ///
    /// # Errors
    ///
    /// Any error from [`formula::parse`] or [`Material::new`].
    pub fn from_formula(formula: &str, density: f64, phase: Phase) -> Result<Self, Error> {
        let parsed = formula::parse(formula)?;
        Self::new(parsed, density, phase)
    }

    #[inline]
    pub fn density(&self) -> f64 {
        self.density
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Composition entries in insertion order.
    #[inline]
    pub fn elements(&self) -> &[CompositionEntry] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, element: Element) -> Option<&CompositionEntry> {
        self.elements.iter().find(|e| e.element == element)
    }

    pub fn contains(&self, element: Element) -> bool {
        self.get(element).is_some()
    }

    /// Returns a copy with a new density.
    pub fn with_density(&self, density: f64) -> Result<Self, Error> {
        Ok(Self {
            density: require_positive("density", density)?,
            ..self.clone()
        })
    }

    pub fn with_phase(&self, phase: Phase) -> Self {
        Self {
            phase,
            ..self.clone()
        }
    }

    /// Returns a copy with `element`'s displacement energy replaced.
    ///
    /// Handy for formula-built materials, which otherwise have no way to
    /// override the defaults.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the element is absent or the energy is
    /// negative.
    pub fn with_displacement(&self, element: Element, displacement: f64) -> Result<Self, Error> {
        let displacement = require_non_negative("E_d", displacement)?;
        let mut material = self.clone();
        let entry = material
            .elements
            .iter_mut()
            .find(|e| e.element == element)
            .ok_or_else(|| {
                Error::validation("composition", format!("{element} is not in this material"))
            })?;
        entry.displacement = displacement;
        Ok(material)
    }

    /// Space-separated `symbol fraction` pairs, e.g. `"Fe 0.10 Al 0.90"`.
    pub fn chemical_formula(&self) -> String {
        self.elements
            .iter()
            .map(|e| format!("{} {:.2}", e.element.symbol(), e.stoich))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        if (self.density - other.density).abs() > EQ_TOLERANCE {
            return false;
        }
        if self.elements.len() != other.elements.len() {
            return false;
        }
        self.elements.iter().all(|entry| {
            other
                .get(entry.element)
                .is_some_and(|theirs| entry.approx_eq(theirs, EQ_TOLERANCE))
        })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Material formula:{} density:{:.3}>",
            self.chemical_formula(),
            self.density
        )
    }
}
