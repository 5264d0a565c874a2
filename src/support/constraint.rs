//! Validated dimensions and ratios.
//!
//! A pipe only makes sense with a positive bore and wall, a tone hole with a
//! positive diameter, and a lip-covered embouchure with a playable lips
//! coverage. Those checks run once, when the value is wrapped, so the
//! correction formulas can take their inputs as given.
//!
//! [`Constrained<T, C>`] pairs a value with a zero-sized marker `C` that
//! implements [`Constraint<T>`]. The crate ships one general marker:
//!
//! - [`StrictlyPositive`]: lengths and frequencies greater than zero
//!
//! Domain ranges define their own marker next to the type that needs them,
//! as the embouchure module does for lips coverage.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A check applied to a value before it is wrapped in [`Constrained`].
pub trait Constraint<T> {
    /// Checks `value` against the constraint.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] naming the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a dimension or ratio was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("dimension is negative")]
    Negative,
    #[error("dimension is zero")]
    Zero,
    #[error("dimension is NaN")]
    NotANumber,
    #[error("ratio is below its playable range")]
    BelowMinimum,
    #[error("ratio is above its playable range")]
    AboveMaximum,
}

/// Result of building a validated value.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that passed the check of marker `C`.
///
/// # Example
///
/// ```
/// use quena_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let wall = Constrained::<Length, StrictlyPositive>::new(Length::new::<millimeter>(3.5));
/// assert!(wall.is_ok());
///
/// let flat = Constrained::<Length, StrictlyPositive>::new(Length::new::<millimeter>(0.0));
/// assert!(flat.is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` if it passes `C`.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C::check`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
