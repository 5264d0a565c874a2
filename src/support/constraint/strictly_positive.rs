use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values greater than zero.
///
/// Bore diameters, wall thicknesses, hole diameters and frequencies all carry
/// this check. Infinity passes it, so callers that need a finite value check
/// that separately.
///
/// # Examples
///
/// ```
/// use approx::assert_relative_eq;
/// use quena_models::support::constraint::StrictlyPositive;
/// use uom::si::{
///     f64::{Frequency, Length},
///     frequency::hertz,
///     length::millimeter,
/// };
///
/// let bore = StrictlyPositive::new(Length::new::<millimeter>(18.0)).unwrap();
/// assert_relative_eq!(
///     bore.into_inner().get::<millimeter>(),
///     18.0,
///     max_relative = 1e-12
/// );
///
/// assert!(StrictlyPositive::new(Frequency::new::<hertz>(0.0)).is_err());
/// assert!(StrictlyPositive::new(Length::new::<millimeter>(-3.5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Wraps `value` if it is greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Zero`], [`ConstraintError::Negative`] or
    /// [`ConstraintError::NotANumber`].
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Frequency, Length},
        frequency::hertz,
        length::millimeter,
    };

    #[test]
    fn pipe_dimensions() -> Result<(), ConstraintError> {
        let wall = StrictlyPositive::new(Length::new::<millimeter>(3.5))?;
        assert_relative_eq!(
            wall.as_ref().get::<millimeter>(),
            3.5,
            max_relative = 1e-12
        );

        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(-18.0)),
            Err(ConstraintError::Negative)
        );
        Ok(())
    }

    #[test]
    fn frequencies() {
        assert!(StrictlyPositive::new(Frequency::new::<hertz>(440.0)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Frequency::new::<hertz>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Frequency::new::<hertz>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn infinity_is_positive() {
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert!(StrictlyPositive::new(Frequency::new::<hertz>(f64::INFINITY)).is_ok());
    }

    #[test]
    fn bare_numbers() {
        assert_eq!(StrictlyPositive::new(7).map(Constrained::into_inner), Ok(7));
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-1), Err(ConstraintError::Negative));
    }
}
