//! Embouchure strategies.
//!
//! An embouchure decides two things for a [`Resonator`](super::Resonator):
//! the effective circular diameter used by the correction formulas, and how
//! the base embouchure correction is scaled.

use std::f64::consts::PI;

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, ConstraintResult, StrictlyPositive,
};
use uom::si::{
    f64::{Length, Ratio},
    ratio::ratio,
};

use super::Bore;

/// Embouchure geometry seen by the resonator correction formulas.
pub trait Embouchure {
    /// Effective circular diameter of the embouchure opening.
    fn diameter(&self, bore: &Bore) -> Length;

    /// Scales the base embouchure correction.
    ///
    /// The default leaves the correction unchanged.
    fn correction(&self, base: Length) -> Length {
        base
    }
}

/// Quena-style notch partially covered by the player's lower lip.
///
/// The notch is specified by its opening size, which should be close to the
/// bore radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LipCovered {
    size: Length,
    lips_coverage: Ratio,
}

impl LipCovered {
    /// Lips coverage ratio used when none is given.
    pub const DEFAULT_LIPS_COVERAGE: f64 = 0.15;

    /// Constructs a lip-covered embouchure with the default lips coverage.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is not strictly positive.
    pub fn new(size: Length) -> ConstraintResult<Self> {
        let size = StrictlyPositive::new(size)?;
        Ok(Self {
            size: size.into_inner(),
            lips_coverage: Ratio::new::<ratio>(Self::DEFAULT_LIPS_COVERAGE),
        })
    }

    /// Returns a copy using the given lips coverage ratio.
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio lies outside the [`LipsCoverage`] range.
    pub fn with_lips_coverage(self, lips_coverage: Ratio) -> ConstraintResult<Self> {
        let lips_coverage = Constrained::<Ratio, LipsCoverage>::new(lips_coverage)?;
        Ok(Self {
            lips_coverage: lips_coverage.into_inner(),
            ..self
        })
    }

    /// Returns the opening size of the notch.
    #[must_use]
    pub fn size(&self) -> Length {
        self.size
    }

    /// Returns the fraction of the opening covered by the lips.
    #[must_use]
    pub fn lips_coverage(&self) -> Ratio {
        self.lips_coverage
    }
}

impl Embouchure for LipCovered {
    /// Circular diameter equivalent to the roughly square notch opening.
    fn diameter(&self, _bore: &Bore) -> Length {
        self.size * (1.0 + PI / 4.0).sqrt()
    }

    fn correction(&self, base: Length) -> Length {
        base * (1.0 - self.lips_coverage.get::<ratio>())
    }
}

/// Clarinet-style embouchure as large as the bore itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectBore;

impl Embouchure for DirectBore {
    fn diameter(&self, bore: &Bore) -> Length {
        bore.inner_diameter()
    }
}

/// Marker type enforcing a playable lips coverage ratio: `0.11 ≤ x ≤ 0.25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LipsCoverage;

impl LipsCoverage {
    /// Smallest playable lips coverage ratio.
    pub const MIN: f64 = 0.11;

    /// Largest playable lips coverage ratio.
    pub const MAX: f64 = 0.25;
}

impl Constraint<Ratio> for LipsCoverage {
    fn check(value: &Ratio) -> Result<(), ConstraintError> {
        let value = value.get::<ratio>();
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value < Self::MIN {
            Err(ConstraintError::BelowMinimum)
        } else if value > Self::MAX {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}
