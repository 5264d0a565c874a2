//! Ideal air-column acoustics.
//!
//! Relationships for an idealized cylindrical resonator, before any empirical
//! correction is applied. The correction formulas built on top of these live
//! with the models that use them.

use uom::si::{
    f64::{Frequency, Length, Velocity},
    velocity::meter_per_second,
};

/// Speed of sound in air used by every model in this crate (345 m/s).
#[must_use]
pub fn speed_of_sound() -> Velocity {
    Velocity::new::<meter_per_second>(345.0)
}

/// Half of the wavelength of `frequency` in air.
///
/// This is the length of an ideal, uncorrected air column open at both ends
/// that resonates at `frequency`.
///
/// The frequency is expected to be strictly positive.
/// A zero frequency yields an infinite length.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use quena_models::support::acoustics::half_wavelength;
/// use uom::si::{f64::Frequency, frequency::hertz, length::millimeter};
///
/// let length = half_wavelength(Frequency::new::<hertz>(345.0));
/// assert_relative_eq!(length.get::<millimeter>(), 500.0, max_relative = 1e-12);
/// ```
#[must_use]
pub fn half_wavelength(frequency: Frequency) -> Length {
    speed_of_sound() / (frequency * 2.0)
}
