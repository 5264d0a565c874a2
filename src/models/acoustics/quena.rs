//! Quena and clarinet bore models.
//!
//! This module provides [`twine_core::Model`] implementations that place the
//! embouchure and tone holes of an end-blown instrument cut from a straight
//! pipe. The computational core is in the internal `core` module.
//!
//! - [`EmbouchureModel`]: embouchure placement of a bare resonator for a
//!   target frequency.
//! - [`QuenaModel`]: full quena layout for a tuning.
//!
//! # Example
//!
//! ```
//! use quena_models::models::acoustics::quena::{
//!     Bore, HoleDiameters, LipCovered, QuenaModel, Tuning,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Frequency, Length},
//!     frequency::hertz,
//!     length::millimeter,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bore = Bore::new(
//!     Length::new::<millimeter>(18.0),
//!     Length::new::<millimeter>(3.5),
//! )?;
//! let embouchure = LipCovered::new(Length::new::<millimeter>(9.5))?;
//!
//! let model = QuenaModel::new(
//!     bore,
//!     embouchure,
//!     HoleDiameters::Uniform(Length::new::<millimeter>(10.0)),
//! );
//!
//! let layout = model.call(&Tuning {
//!     fundamental: Frequency::new::<hertz>(362.67),
//!     holes: vec![Frequency::new::<hertz>(400.0)],
//! })?;
//!
//! assert_eq!(layout.holes.len(), 1);
//! assert!(layout.holes[0].location > Length::new::<millimeter>(0.0));
//! # Ok(())
//! # }
//! ```

pub(crate) mod core;

pub use self::core::{
    AirColumn, Bore, ClarinetBody, DirectBore, Embouchure, EmbouchurePlacement, HoleDiameters,
    HoleLayout, Infeasibility, InputError, LipCovered, LipsCoverage, Quena, QuenaBody,
    QuenaLayout, Resonator, SolveError, SolverConfig, ToneHole, ToneHoles,
};

use thiserror::Error;
use twine_core::Model;
use uom::si::f64::Frequency;

/// Errors that can occur while designing a quena from a tuning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuenaError {
    /// The tuning or the hole diameters are invalid.
    #[error("invalid quena input")]
    Input(#[from] InputError),

    /// The tone holes could not be placed.
    #[error("tone hole placement failed")]
    Solve(#[from] SolveError),
}

/// Embouchure placement for a fixed bore and embouchure.
///
/// The model input is the target frequency of the resonator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbouchureModel<E> {
    bore: Bore,
    embouchure: E,
}

impl<E> EmbouchureModel<E> {
    #[must_use]
    pub fn new(bore: Bore, embouchure: E) -> Self {
        Self { bore, embouchure }
    }
}

impl<E: Embouchure + Clone> Model for EmbouchureModel<E> {
    type Input = Frequency;
    type Output = EmbouchurePlacement;
    type Error = InputError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let resonator = Resonator::new(self.bore, *input, self.embouchure.clone())?;
        Ok(EmbouchurePlacement::of(&resonator))
    }
}

/// Frequencies a quena should sound.
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    /// Frequency with every hole closed.
    pub fundamental: Frequency,

    /// Frequency of each tone hole, in any order.
    pub holes: Vec<Frequency>,
}

/// Quena layout for a fixed pipe, embouchure and hole drilling.
///
/// The model input is a [`Tuning`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuenaModel {
    bore: Bore,
    embouchure: LipCovered,
    diameters: HoleDiameters,
    ring: bool,
    config: SolverConfig,
}

impl QuenaModel {
    /// Constructs a ringless quena model with the default solver configuration.
    #[must_use]
    pub fn new(bore: Bore, embouchure: LipCovered, diameters: HoleDiameters) -> Self {
        Self {
            bore,
            embouchure,
            diameters,
            ring: false,
            config: SolverConfig::default(),
        }
    }

    /// Returns a copy with or without an end ring.
    #[must_use]
    pub fn with_ring(self, ring: bool) -> Self {
        Self { ring, ..self }
    }

    /// Returns a copy using the given solver configuration.
    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }

    /// Builds the quena sounding `tuning`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if a frequency is invalid or the diameters do
    /// not match the hole count.
    pub fn quena(&self, tuning: &Tuning) -> Result<Quena, InputError> {
        let body = Resonator::new(self.bore, tuning.fundamental, self.embouchure)?;
        let holes = ToneHoles::new(tuning.holes.clone(), self.diameters.clone())?;
        Ok(Quena::new(body, holes).with_ring(self.ring))
    }
}

impl Model for QuenaModel {
    type Input = Tuning;
    type Output = QuenaLayout;
    type Error = QuenaError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let quena = self.quena(input)?;
        Ok(quena.layout(&self.config)?)
    }
}
