use crate::model::error::Error;
use crate::model::ion::Ion;
use crate::model::target::Target;

use super::settings::{CalculationMode, TrimSettings};

/// A complete, validated TRIM calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct Trim {
    ion: Ion,
    target: Target,
    number_ions: u32,
    calculation: CalculationMode,
    settings: TrimSettings,
}

impl Trim {
    /// # Errors
    ///
    /// [`Error::Validation`] if `number_ions` is zero or any setting is out
    /// of range.
    pub fn new(
        ion: Ion,
        target: Target,
        number_ions: u32,
        calculation: CalculationMode,
        settings: TrimSettings,
    ) -> Result<Self, Error> {
        if number_ions == 0 {
            return Err(Error::validation("number_ions", "must be at least 1"));
        }
        settings.validate()?;
        Ok(Self {
            ion,
            target,
            number_ions,
            calculation,
            settings,
        })
    }

    #[inline]
    pub fn ion(&self) -> &Ion {
        &self.ion
    }

    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }

    #[inline]
    pub fn number_ions(&self) -> u32 {
        self.number_ions
    }

    #[inline]
    pub fn calculation(&self) -> CalculationMode {
        self.calculation
    }

    #[inline]
    pub fn settings(&self) -> &TrimSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::layer::Layer;
    use crate::model::material::Phase;

    fn target() -> Target {
        Target::new(vec![
            Layer::from_formula("Au", 19.32, 1000.0, Phase::Solid).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn builds_valid_run() {
        let trim = Trim::new(
            Ion::new("He", 2.0e6).unwrap(),
            target(),
            100,
            CalculationMode::FullCascade,
            TrimSettings::default(),
        )
        .unwrap();
        assert_eq!(trim.number_ions(), 100);
        assert_eq!(trim.calculation().code(), 2);
        assert_eq!(trim.target().element_count(), 1);
    }

    #[test]
    fn rejects_zero_ions_and_bad_settings() {
        let ion = Ion::new("He", 2.0e6).unwrap();
        assert!(
            Trim::new(ion, target(), 0, CalculationMode::default(), TrimSettings::default())
                .is_err()
        );
        let settings = TrimSettings {
            exyz: 5,
            ..Default::default()
        };
        assert!(Trim::new(ion, target(), 10, CalculationMode::default(), settings).is_err());
    }
}
