//! Error types for the material and run model.
//!
//! Every constructor in [`crate::model`] and [`crate::run`] validates eagerly
//! and reports failures through this single enum. There is no partially valid
//! value: a constructor either returns a complete object or an error.

use thiserror::Error;

use super::element::Element;

/// Errors raised while building elements, materials, layers and runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The identifier does not name an element in the registry.
    #[error("unknown element identifier: '{0}'")]
    UnknownElement(String),

    /// A numeric, shape or grammar constraint was violated.
    #[error("invalid {field}: {detail}")]
    Validation {
        /// Name of the offending field.
        field: &'static str,
        /// Description of the problem.
        detail: String,
    },

    /// A chemical formula names the same element more than once.
    #[error("cannot have duplicate element {0} in chemical formula")]
    DuplicateElement(Element),
}

impl Error {
    /// Creates a [`Validation`](Error::Validation) error.
    ///
    /// # Arguments
    ///
    /// * `field` — Name of the offending field
    /// * `details` — Description of the problem
    pub fn validation(field: &'static str, details: impl Into<String>) -> Self {
        Self::Validation {
            field,
            detail: details.into(),
        }
    }
}

/// Checks that `value` is finite and strictly greater than zero.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::validation(
            field,
            format!("{value} must be greater than zero"),
        ))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, Error> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::validation(field, format!("{value} must be zero or positive")))
    }
}

/// Checks that an integer setting lies in `lo..=hi`.
pub(crate) fn require_in_range<T>(field: &'static str, value: T, lo: T, hi: T) -> Result<T, Error>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if value >= lo && value <= hi {
        Ok(value)
    } else {
        Err(Error::validation(
            field,
            format!("{value} must be between {lo} and {hi}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positivity_checks() {
        assert_eq!(require_positive("density", 1.5), Ok(1.5));
        assert!(require_positive("density", 0.0).is_err());
        assert!(require_positive("density", f64::NAN).is_err());
        assert_eq!(require_non_negative("lattice", 0.0), Ok(0.0));
        assert!(require_non_negative("lattice", -1e-9).is_err());
        assert!(require_non_negative("lattice", f64::INFINITY).is_err());
    }

    #[test]
    fn range_check_is_inclusive() {
        assert_eq!(require_in_range("plot_mode", 5u8, 0, 5), Ok(5));
        assert!(require_in_range("plot_mode", 6u8, 0, 5).is_err());
    }

    #[test]
    fn messages_name_the_field() {
        let err = require_positive("width", -2.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid width: -2 must be greater than zero");
        assert_eq!(
            Error::DuplicateElement(Element::Si).to_string(),
            "cannot have duplicate element Si in chemical formula"
        );
    }
}
