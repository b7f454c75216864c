use crate::model::error::Error;
use crate::model::ion::Ion;
use crate::model::layer::Layer;

use super::settings::SrSettings;

/// A stopping-and-range table calculation for one ion in one layer.
///
/// The ion's energy is the upper end of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct Sr {
    ion: Ion,
    layer: Layer,
    settings: SrSettings,
}

impl Sr {
    /// # Errors
    ///
    /// [`Error::Validation`] if a setting is out of range or the minimum
    /// energy is not below the ion energy.
    pub fn new(ion: Ion, layer: Layer, settings: SrSettings) -> Result<Self, Error> {
        settings.validate()?;
        if settings.energy_min >= ion.energy() {
            return Err(Error::validation(
                "energy_min",
                format!(
                    "{} eV must be below the ion energy {} eV",
                    settings.energy_min,
                    ion.energy()
                ),
            ));
        }
        Ok(Self {
            ion,
            layer,
            settings,
        })
    }

    #[inline]
    pub fn ion(&self) -> &Ion {
        &self.ion
    }

    #[inline]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    #[inline]
    pub fn settings(&self) -> &SrSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::material::Phase;

    #[test]
    fn energy_range_must_be_increasing() {
        let layer = Layer::from_formula("Si", 2.33, 1.0, Phase::Solid).unwrap();
        let ion = Ion::new("B", 5.0e5).unwrap();

        assert!(Sr::new(ion, layer.clone(), SrSettings::default()).is_ok());

        let settings = SrSettings {
            energy_min: 5.0e5,
            ..Default::default()
        };
        let err = Sr::new(ion, layer, settings).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "energy_min", .. }));
    }
}
