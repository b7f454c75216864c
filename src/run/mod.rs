//! Run configurations consumed by the input-file writers.
//!
//! - [`Trim`] – ion, multi-layer target and the TRIM switches in [`TrimSettings`]
//! - [`Sr`] – ion and single layer for a stopping-and-range table ([`SrSettings`])
//! - [`AutoTrim`] – the TRIMAUTO start mode

mod settings;
mod sr;
mod trim;

pub use settings::{CalculationMode, MAX_DESCRIPTION_LEN, SrSettings, TrimSettings};
pub use sr::Sr;
pub use trim::Trim;

use serde::Deserialize;

use crate::model::error::Error;

/// How TRIM starts when launched by automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
#[repr(u8)]
pub enum AutoTrim {
    /// Normal interactive start.
    Normal = 0,
    /// Run without keyboard input.
    #[default]
    Unattended = 1,
    /// Resume the last saved calculation.
    Resume = 2,
}

impl AutoTrim {
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for AutoTrim {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AutoTrim::Normal),
            1 => Ok(AutoTrim::Unattended),
            2 => Ok(AutoTrim::Resume),
            _ => Err(Error::validation(
                "autotrim mode",
                format!("{value} must be 0, 1 or 2"),
            )),
        }
    }
}
