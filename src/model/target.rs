use super::composition::CompositionEntry;
use super::error::Error;
use super::layer::Layer;

/// An ordered stack of layers, first layer facing the beam.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    layers: Vec<Layer>,
}

impl Target {
    /// # Errors
    ///
    /// [`Error::Validation`] if `layers` is empty.
    pub fn new(layers: Vec<Layer>) -> Result<Self, Error> {
        if layers.is_empty() {
            return Err(Error::validation(
                "target",
                "a target needs at least one layer",
            ));
        }
        Ok(Self { layers })
    }

    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> Result<Self, Error> {
        Self::new(layers.into_iter().collect())
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of target atoms as TRIM counts them: the same element in two
    /// layers is two atoms.
    pub fn element_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.len()).sum()
    }

    /// Every composition entry, layer by layer.
    pub fn entries(&self) -> impl Iterator<Item = &CompositionEntry> {
        self.layers.iter().flat_map(|layer| layer.elements())
    }

    pub fn total_width(&self) -> f64 {
        self.layers.iter().map(|layer| layer.width()).sum()
    }
}
