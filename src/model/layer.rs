use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;

use super::composition::CompositionSpec;
use super::element::ElementId;
use super::error::{Error, require_positive};
use super::material::{Material, Phase};

/// A material slab of finite width inside a target.
///
/// Derefs to its [`Material`], so composition, density and phase are read
/// the same way on both.
///
/// # Examples
///
/// ```
/// use srim_input::{Layer, Phase};
///
/// let layer = Layer::from_formula("SiC", 3.21, 10_000.0, Phase::Solid)?;
/// assert_eq!(layer.name(), "Si 0.50 C 0.50");
///
/// let named = layer.with_name("substrate")?;
/// assert_eq!(named.name(), "substrate");
/// assert_eq!(named.bragg_correction(), 1.0);
/// # Ok::<(), srim_input::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    material: Material,
    width: f64,
    name: Option<String>,
    bragg_correction: f64,
}

impl Layer {
    /// Builds a layer from `(identifier, spec)` pairs, see [`Material::new`].
    ///
    /// The layer starts unnamed with a Bragg correction of 1.0; set either
    /// with [`with_name`](Self::with_name) and
    /// [`with_bragg_correction`](Self::with_bragg_correction).
    ///
    /// # Errors
    ///
    /// Everything [`Material::new`] rejects, plus a width that is not
    /// strictly positive. Name and correction are checked by their builders.
    pub fn new<I, K, S>(elements: I, density: f64, width: f64, phase: Phase) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<ElementId>,
        S: Into<CompositionSpec>,
    {
        let material = Material::new(elements, density, phase)?;
        Self::from_material(material, width)
    }

    pub fn from_formula(
        formula: &str,
        density: f64,
        width: f64,
        phase: Phase,
    ) -> Result<Self, Error> {
        let material = Material::from_formula(formula, density, phase)?;
        Self::from_material(material, width)
    }

    pub fn from_material(material: Material, width: f64) -> Result<Self, Error> {
        Ok(Self {
            material,
            width: require_positive("width", width)?,
            name: None,
            bragg_correction: 1.0,
        })
    }

    /// Width in Angstroms.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn bragg_correction(&self) -> f64 {
        self.bragg_correction
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// The explicit name, or the current chemical formula when none was set.
    pub fn name(&self) -> Cow<'_, str> {
        match &self.name {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(self.material.chemical_formula()),
        }
    }

    pub fn has_explicit_name(&self) -> bool {
        self.name.is_some()
    }

    /// Sets an explicit name; an empty name restores the formula fallback.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the name contains a double quote or a line
    /// break, since TRIM.IN writes it inside quotes on a single line.
    pub fn with_name(self, name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.contains(['"', '\r', '\n']) {
            return Err(Error::validation(
                "layer name",
                format!("{name:?} must not contain double quotes or line breaks"),
            ));
        }
        Ok(Self {
            name: (!name.is_empty()).then_some(name),
            ..self
        })
    }

    pub fn with_bragg_correction(self, bragg_correction: f64) -> Self {
        Self {
            bragg_correction,
            ..self
        }
    }

    pub fn with_width(self, width: f64) -> Result<Self, Error> {
        Ok(Self {
            width: require_positive("width", width)?,
            ..self
        })
    }

    pub fn with_density(self, density: f64) -> Result<Self, Error> {
        Ok(Self {
            material: self.material.with_density(density)?,
            ..self
        })
    }
}

impl Deref for Layer {
    type Target = Material;

    fn deref(&self) -> &Self::Target {
        &self.material
    }
}

impl AsRef<Material> for Layer {
    fn as_ref(&self) -> &Material {
        &self.material
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Layer | material: {}, width:{}, bragg_correction: {}>",
            self.material.chemical_formula(),
            self.width,
            self.bragg_correction
        )
    }
}
