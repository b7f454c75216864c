use serde::Deserialize;

use crate::model::error::{Error, require_in_range, require_positive};

/// Longest description TRIM accepts in the target line.
pub const MAX_DESCRIPTION_LEN: usize = 80;

/// Switches and plot options for a TRIM run.
///
/// Every field has TRIM's usual default, so a run description only lists
/// what it changes.
///
/// # Examples
///
/// ```
/// use srim_input::TrimSettings;
///
/// let settings = TrimSettings {
///     collisions: 1,
///     angle_ions: 7.0,
///     ..Default::default()
/// };
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrimSettings {
    /// Free text written into the target line (80 characters at most).
    pub description: String,

    /// Show TRIM's reminders (0 or 1).
    pub reminders: u8,

    /// Ions between automatic saves (0 disables autosave).
    pub autosave: u32,

    /// Plot shown while running (0 to 5, 5 = no graphics).
    pub plot_mode: u8,

    /// Plot depth window in Angstroms; `0 0` shows the full target.
    pub plot_xmin: f64,
    pub plot_xmax: f64,

    /// Write RANGES.txt (0 or 1).
    pub ranges: u8,
    /// Write BACKSCAT.txt (0 or 1).
    pub backscattered: u8,
    /// Write TRANSMIT.txt (0 or 1).
    pub transmit: u8,
    /// Write SPUTTER.txt (0 or 1).
    pub sputtered: u8,
    /// Write COLLISON.txt (0 = no, 1 = ion, 2 = ion and recoils).
    pub collisions: u8,
    /// Write the special EXYZ.txt file (0 or 1).
    pub exyz: u8,

    /// Angle of incidence in degrees, in `[0, 90)`.
    pub angle_ions: f64,

    /// Compound correction written on the ion line.
    pub bragg_correction: f64,

    pub random_seed: u32,

    /// Stopping power version flag (0 or 1).
    pub version: u8,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            description: "srim-input run".to_string(),
            reminders: 0,
            autosave: 0,
            plot_mode: 5,
            plot_xmin: 0.0,
            plot_xmax: 0.0,
            ranges: 0,
            backscattered: 0,
            transmit: 0,
            sputtered: 0,
            collisions: 0,
            exyz: 0,
            angle_ions: 0.0,
            bragg_correction: 1.0,
            random_seed: 0,
            version: 0,
        }
    }
}

impl TrimSettings {
    /// Checks every field against the range TRIM accepts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(Error::validation(
                "description",
                format!("must be at most {MAX_DESCRIPTION_LEN} characters"),
            ));
        }
        if self.description.contains('"') {
            return Err(Error::validation(
                "description",
                "must not contain double quotes",
            ));
        }

        require_in_range("reminders", self.reminders, 0, 1)?;
        require_in_range("plot_mode", self.plot_mode, 0, 5)?;
        require_in_range("ranges", self.ranges, 0, 1)?;
        require_in_range("backscattered", self.backscattered, 0, 1)?;
        require_in_range("transmit", self.transmit, 0, 1)?;
        require_in_range("sputtered", self.sputtered, 0, 1)?;
        require_in_range("collisions", self.collisions, 0, 2)?;
        require_in_range("exyz", self.exyz, 0, 1)?;
        require_in_range("version", self.version, 0, 1)?;

        if !(self.plot_xmin >= 0.0 && self.plot_xmin <= self.plot_xmax) {
            return Err(Error::validation(
                "plot depths",
                format!(
                    "need 0 <= xmin <= xmax, got {} and {}",
                    self.plot_xmin, self.plot_xmax
                ),
            ));
        }
        if !(self.angle_ions >= 0.0 && self.angle_ions < 90.0) {
            return Err(Error::validation(
                "angle_ions",
                format!("{} must be in [0, 90) degrees", self.angle_ions),
            ));
        }
        if !self.bragg_correction.is_finite() {
            return Err(Error::validation("bragg_correction", "must be finite"));
        }
        Ok(())
    }
}

/// TRIM's damage calculation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "u8")]
#[repr(u8)]
pub enum CalculationMode {
    /// Ion distribution and quick damage (Kinchin-Pease).
    #[default]
    KinchinPease = 1,
    /// Detailed calculation with full damage cascades.
    FullCascade = 2,
    /// Monolayer collision steps / surface sputtering.
    MonolayerSputtering = 3,
}

impl CalculationMode {
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for CalculationMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CalculationMode::KinchinPease),
            2 => Ok(CalculationMode::FullCascade),
            3 => Ok(CalculationMode::MonolayerSputtering),
            _ => Err(Error::validation(
                "calculation",
                format!("{value} must be 1, 2 or 3"),
            )),
        }
    }
}

/// Options for a stopping-and-range table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SrSettings {
    /// Lowest ion energy of the table, in eV.
    pub energy_min: f64,

    /// Stopping units selector (1 to 8).
    pub output_type: u8,

    /// File SR writes its table to.
    pub output_filename: String,

    /// Compound correction.
    pub correction: f64,
}

impl Default for SrSettings {
    fn default() -> Self {
        Self {
            energy_min: 1.0e3,
            output_type: 1,
            output_filename: "SRIM Outputs".to_string(),
            correction: 1.0,
        }
    }
}

impl SrSettings {
    pub fn validate(&self) -> Result<(), Error> {
        require_positive("energy_min", self.energy_min)?;
        require_in_range("output_type", self.output_type, 1, 8)?;
        if self.output_filename.trim().is_empty() {
            return Err(Error::validation("output_filename", "must not be empty"));
        }
        if !self.correction.is_finite() {
            return Err(Error::validation("correction", "must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_valid() {
        let trim = TrimSettings::default();
        assert!(trim.validate().is_ok());
        assert_eq!(trim.plot_mode, 5);
        assert_eq!(trim.bragg_correction, 1.0);

        let sr = SrSettings::default();
        assert!(sr.validate().is_ok());
        assert_eq!(sr.energy_min, 1.0e3);
        assert_eq!(sr.output_filename, "SRIM Outputs");
    }

    #[test]
    fn trim_settings_ranges() {
        let bad = [
            TrimSettings { collisions: 3, ..Default::default() },
            TrimSettings { plot_mode: 6, ..Default::default() },
            TrimSettings { angle_ions: 90.0, ..Default::default() },
            TrimSettings { angle_ions: -1.0, ..Default::default() },
            TrimSettings { plot_xmin: 10.0, plot_xmax: 5.0, ..Default::default() },
            TrimSettings { description: "x".repeat(81), ..Default::default() },
            TrimSettings { description: "say \"hi\"".into(), ..Default::default() },
            TrimSettings { version: 2, ..Default::default() },
        ];
        for settings in bad {
            assert!(settings.validate().is_err(), "{settings:?}");
        }

        let ok = TrimSettings {
            collisions: 2,
            plot_xmin: 0.0,
            plot_xmax: 5000.0,
            description: "x".repeat(80),
            ..Default::default()
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn sr_settings_ranges() {
        assert!(SrSettings { output_type: 0, ..Default::default() }.validate().is_err());
        assert!(SrSettings { output_type: 9, ..Default::default() }.validate().is_err());
        assert!(SrSettings { energy_min: 0.0, ..Default::default() }.validate().is_err());
        assert!(SrSettings { output_filename: " ".into(), ..Default::default() }.validate().is_err());
    }

    #[test]
    fn calculation_mode_codes() {
        assert_eq!(CalculationMode::try_from(2).unwrap(), CalculationMode::FullCascade);
        assert_eq!(CalculationMode::default().code(), 1);
        assert!(CalculationMode::try_from(4).is_err());
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let settings: TrimSettings = toml::from_str("collisions = 2\nangle_ions = 7.0").unwrap();
        assert_eq!(settings.collisions, 2);
        assert_eq!(settings.angle_ions, 7.0);
        assert_eq!(settings.plot_mode, 5);

        assert!(toml::from_str::<TrimSettings>("colisions = 2").is_err());
    }
}
