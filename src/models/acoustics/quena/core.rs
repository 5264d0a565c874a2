//! Quena and clarinet bore placement.
//!
//! An ideal half-wavelength air column is corrected for the open pipe end,
//! the embouchure and, on a quena, for the ring and the tone holes. Tone
//! holes are placed by fixed-point iteration since each open-hole correction
//! depends on the hole's own position.

mod bore;
mod embouchure;
mod error;
mod instrument;
mod layout;
mod resonator;
mod solve;
mod tone_holes;
mod traits;

#[cfg(test)]
mod test_support;

pub use bore::Bore;
pub use embouchure::{DirectBore, Embouchure, LipCovered, LipsCoverage};
pub use error::InputError;
pub use instrument::Quena;
pub use layout::{EmbouchurePlacement, HoleLayout, QuenaLayout};
pub use resonator::{ClarinetBody, QuenaBody, Resonator};
pub use solve::{Infeasibility, SolveError, SolverConfig};
pub use tone_holes::{HoleDiameters, ToneHole, ToneHoles};
pub use traits::AirColumn;

use solve::solve;
