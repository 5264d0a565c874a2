use thiserror::Error;
use uom::si::{f64::Frequency, frequency::hertz};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Errors raised while constructing resonators and tone holes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// A target or tone-hole frequency is not a finite positive value.
    #[error("invalid frequency: {frequency:?}")]
    InvalidFrequency { frequency: Frequency },

    /// Hole diameters were given per hole but their count differs from the
    /// number of hole frequencies.
    #[error("got {diameters} hole diameters for {frequencies} hole frequencies")]
    DiameterCountMismatch {
        frequencies: usize,
        diameters: usize,
    },

    /// A geometric dimension violates its constraint.
    #[error("invalid dimension")]
    Constraint(#[from] ConstraintError),
}

impl InputError {
    /// Checks that a frequency is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidFrequency`] otherwise.
    pub(super) fn check_frequency(frequency: Frequency) -> Result<Frequency, Self> {
        match StrictlyPositive::new(frequency) {
            Ok(valid) if valid.as_ref().get::<hertz>().is_finite() => Ok(valid.into_inner()),
            _ => Err(Self::InvalidFrequency { frequency }),
        }
    }
}
