use uom::{
    ConstZero,
    si::{f64::Length, length::millimeter},
};

use super::{
    AirColumn, Bore, HoleLayout, QuenaBody, QuenaLayout, SolveError, SolverConfig, ToneHoles,
    solve,
};

/// A quena: a lip-covered resonator with tone holes and an optional end ring.
///
/// The quena decorates its body's air column: the pipe end moves up by the
/// ring offset and by the closed adjustment of every tone hole.
#[derive(Debug, Clone, PartialEq)]
pub struct Quena {
    body: QuenaBody,
    holes: ToneHoles,
    ring: bool,
}

impl Quena {
    /// Length by which an end ring shortens the usable bore, in millimetres.
    pub const RING_OFFSET_MM: f64 = 23.58;

    /// Constructs a quena without an end ring.
    #[must_use]
    pub fn new(body: QuenaBody, holes: ToneHoles) -> Self {
        Self {
            body,
            holes,
            ring: false,
        }
    }

    /// Returns a copy with or without an end ring.
    #[must_use]
    pub fn with_ring(self, ring: bool) -> Self {
        Self { ring, ..self }
    }

    #[must_use]
    pub fn body(&self) -> &QuenaBody {
        &self.body
    }

    #[must_use]
    pub fn bore(&self) -> &Bore {
        self.body.bore()
    }

    #[must_use]
    pub fn holes(&self) -> &ToneHoles {
        &self.holes
    }

    #[must_use]
    pub fn has_ring(&self) -> bool {
        self.ring
    }

    /// Shortening of the column caused by the end ring, if any.
    #[must_use]
    pub fn ring_adjustment(&self) -> Length {
        if self.ring {
            Length::new::<millimeter>(Self::RING_OFFSET_MM)
        } else {
            Length::ZERO
        }
    }

    /// Cumulative closed-hole adjustment of every hole from index `first` on.
    #[must_use]
    pub fn closed_adjustment_from(&self, first: usize) -> Length {
        self.holes.closed_adjustment_from(first, self.bore())
    }

    /// Tone-hole positions, measured from the start of the air column.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the hole geometry is infeasible or the
    /// iteration does not converge.
    pub fn hole_positions(&self, config: &SolverConfig) -> Result<Vec<Length>, SolveError> {
        let solved = solve(self, config)?;
        Ok(solved.iter().map(|hole| hole.position).collect())
    }

    /// Physical tone-hole locations, measured from the open pipe end.
    ///
    /// # Errors
    ///
    /// Same as [`Quena::hole_positions`].
    pub fn hole_locations(&self, config: &SolverConfig) -> Result<Vec<Length>, SolveError> {
        let end = self.end_position();
        let positions = self.hole_positions(config)?;
        Ok(positions.into_iter().map(|position| end - position).collect())
    }

    /// Solves the tone holes and gathers every placement of the quena.
    ///
    /// # Errors
    ///
    /// Same as [`Quena::hole_positions`].
    pub fn layout(&self, config: &SolverConfig) -> Result<QuenaLayout, SolveError> {
        let end_position = self.end_position();
        let solved = solve(self, config)?;

        let holes = self
            .holes
            .iter()
            .zip(solved)
            .map(|(hole, solved)| HoleLayout {
                frequency: hole.frequency(),
                diameter: hole.diameter(),
                position: solved.position,
                location: end_position - solved.position,
                iters: solved.iters,
                last_step: solved.last_step,
            })
            .collect();

        Ok(QuenaLayout {
            embouchure_location: self.embouchure_location(),
            end_position,
            holes,
        })
    }
}

impl AirColumn for Quena {
    fn theoretical_length(&self) -> Length {
        self.body.theoretical_length()
    }

    fn end_position(&self) -> Length {
        self.body.end_position() - self.ring_adjustment() - self.closed_adjustment_from(0)
    }

    fn embouchure_correction(&self) -> Length {
        self.body.embouchure_correction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::acoustics::quena::core::{
        InputError, LipCovered, Resonator,
        test_support::{hz, mm, ringed_g4_quena, water_pipe},
    };

    fn single_hole_quena() -> Result<Quena, InputError> {
        let body = Resonator::new(water_pipe(), hz(362.67), LipCovered::new(mm(9.5))?)?;
        let holes = ToneHoles::new(vec![hz(400.0)], mm(10.0))?;
        Ok(Quena::new(body, holes))
    }

    #[test]
    fn single_hole_embouchure() -> Result<(), InputError> {
        let quena = single_hole_quena()?;
        assert_relative_eq!(
            quena.embouchure_location().get::<millimeter>(),
            435.0,
            max_relative = 0.01
        );
        Ok(())
    }

    #[test]
    fn ringed_embouchure() -> Result<(), InputError> {
        let quena = ringed_g4_quena()?;
        assert!(quena.has_ring());
        assert_relative_eq!(
            quena.embouchure_location().get::<millimeter>(),
            385.0 - 9.0,
            max_relative = 0.01
        );
        Ok(())
    }

    #[test]
    fn ring_and_closed_holes_shorten_the_column() -> Result<(), InputError> {
        let quena = ringed_g4_quena()?;
        let body_end = quena.body().end_position();
        let closed: f64 = quena
            .holes()
            .iter()
            .map(|hole| hole.closed_adjustment(quena.bore()).get::<millimeter>())
            .sum();

        assert_relative_eq!(
            quena.end_position().get::<millimeter>(),
            body_end.get::<millimeter>() - 23.58 - closed,
            max_relative = 1e-12
        );

        let unringed = quena.clone().with_ring(false);
        assert_relative_eq!(
            (unringed.end_position() - quena.end_position()).get::<millimeter>(),
            Quena::RING_OFFSET_MM,
            max_relative = 1e-9
        );
        assert_eq!(
            unringed.embouchure_correction(),
            quena.embouchure_correction()
        );
        Ok(())
    }

    #[test]
    fn layout_agrees_with_positions_and_locations() -> Result<(), Box<dyn std::error::Error>> {
        let quena = ringed_g4_quena()?;
        let config = SolverConfig::default();

        let layout = quena.layout(&config)?;
        let positions = quena.hole_positions(&config)?;
        let locations = quena.hole_locations(&config)?;

        assert_eq!(layout.holes.len(), 7);
        assert_eq!(layout.positions(), positions);
        assert_eq!(layout.locations(), locations);
        assert_eq!(layout.embouchure_location, quena.embouchure_location());
        assert_eq!(layout.end_position, quena.end_position());
        Ok(())
    }

    #[test]
    fn without_holes_matches_body() -> Result<(), Box<dyn std::error::Error>> {
        let body = Resonator::new(water_pipe(), hz(392.0), LipCovered::new(mm(9.5))?)?;
        let quena = Quena::new(body, ToneHoles::default());

        assert_eq!(quena.end_position(), body.end_position());
        assert!(quena.hole_positions(&SolverConfig::default())?.is_empty());
        Ok(())
    }
}
