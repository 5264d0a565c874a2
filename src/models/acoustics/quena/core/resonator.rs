use crate::support::acoustics::half_wavelength;
use uom::si::{
    f64::{Frequency, Length},
    ratio::ratio,
};

use super::{AirColumn, Bore, DirectBore, Embouchure, InputError, LipCovered};

/// A bore tuned to a target frequency with a given embouchure.
///
/// The embouchure strategy `E` supplies the embouchure diameter and scales
/// the embouchure correction; everything else is shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resonator<E> {
    bore: Bore,
    frequency: Frequency,
    embouchure: E,
}

/// Quena body: a resonator with a lip-covered notch.
pub type QuenaBody = Resonator<LipCovered>;

/// Clarinet body: a resonator whose embouchure is as wide as the bore.
pub type ClarinetBody = Resonator<DirectBore>;

impl<E: Embouchure> Resonator<E> {
    /// Constructs a resonator sounding at `frequency`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidFrequency`] if the frequency is not
    /// strictly positive.
    pub fn new(bore: Bore, frequency: Frequency, embouchure: E) -> Result<Self, InputError> {
        let frequency = InputError::check_frequency(frequency)?;
        Ok(Self {
            bore,
            frequency,
            embouchure,
        })
    }

    #[must_use]
    pub fn bore(&self) -> &Bore {
        &self.bore
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn embouchure(&self) -> &E {
        &self.embouchure
    }

    /// Effective embouchure diameter.
    #[must_use]
    pub fn embouchure_diameter(&self) -> Length {
        self.embouchure.diameter(&self.bore)
    }

    /// Effective pipe thickness at the embouchure.
    #[must_use]
    pub fn embouchure_thickness(&self) -> Length {
        self.bore.inner_diameter() / 2.0
            + self.bore.wall_thickness()
            + self.embouchure_diameter() * 0.307
    }

    /// Embouchure correction before the strategy scales it.
    #[must_use]
    pub fn base_embouchure_correction(&self) -> Length {
        let diameter_ratio =
            (self.bore.inner_diameter() / self.embouchure_diameter()).get::<ratio>();
        self.embouchure_thickness() * diameter_ratio.powi(2)
    }
}

impl<E: Embouchure> AirColumn for Resonator<E> {
    fn theoretical_length(&self) -> Length {
        half_wavelength(self.frequency)
    }

    fn end_position(&self) -> Length {
        self.theoretical_length() - self.bore.end_correction()
    }

    fn embouchure_correction(&self) -> Length {
        self.embouchure.correction(self.base_embouchure_correction())
    }
}
