//! Result types for embouchure and tone-hole placement.

use uom::si::f64::{Frequency, Length};

use super::AirColumn;

/// Embouchure placement of a resonator.
///
/// Lengths are measured from the start of the theoretical air column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmbouchurePlacement {
    /// Length of the ideal, uncorrected column.
    pub theoretical_length: Length,

    /// Position of the physical pipe end.
    pub end_position: Length,

    /// Embouchure correction applied past the pipe end.
    pub embouchure_correction: Length,

    /// Physical embouchure location.
    pub embouchure_location: Length,
}

impl EmbouchurePlacement {
    /// Captures the embouchure placement of any air column.
    #[must_use]
    pub fn of(column: &impl AirColumn) -> Self {
        Self {
            theoretical_length: column.theoretical_length(),
            end_position: column.end_position(),
            embouchure_correction: column.embouchure_correction(),
            embouchure_location: column.embouchure_location(),
        }
    }
}

/// Placement of a solved quena.
///
/// Holes are ordered by ascending frequency, from the open end up.
#[derive(Debug, Clone, PartialEq)]
pub struct QuenaLayout {
    /// Physical embouchure location.
    pub embouchure_location: Length,

    /// Position of the physical pipe end, ring and closed holes included.
    pub end_position: Length,

    /// Per-hole placement.
    pub holes: Vec<HoleLayout>,
}

impl QuenaLayout {
    /// Hole positions, measured from the start of the air column.
    #[must_use]
    pub fn positions(&self) -> Vec<Length> {
        self.holes.iter().map(|hole| hole.position).collect()
    }

    /// Hole locations, measured from the open pipe end.
    #[must_use]
    pub fn locations(&self) -> Vec<Length> {
        self.holes.iter().map(|hole| hole.location).collect()
    }

    #[must_use]
    pub fn diameters(&self) -> Vec<Length> {
        self.holes.iter().map(|hole| hole.diameter).collect()
    }
}

/// Placement of one tone hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleLayout {
    pub frequency: Frequency,
    pub diameter: Length,

    /// Position measured from the start of the air column.
    pub position: Length,

    /// Location measured from the open pipe end.
    pub location: Length,

    /// Fixed-point iterations needed to place the hole.
    pub iters: usize,

    /// Difference between the accepted iterate and the one before it.
    pub last_step: Length,
}
