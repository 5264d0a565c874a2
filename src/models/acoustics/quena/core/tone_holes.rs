//! Tone holes and their per-hole corrections.

use crate::support::{acoustics::half_wavelength, constraint::StrictlyPositive};
use uom::{
    ConstZero,
    si::{
        f64::{Frequency, Length},
        frequency::hertz,
        length::millimeter,
        ratio::ratio,
    },
};

use super::{Bore, InputError};

/// A finger hole that makes the instrument sound at `frequency` when it is
/// the first open hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneHole {
    frequency: Frequency,
    diameter: Length,
}

impl ToneHole {
    /// Constructs a validated tone hole.
    ///
    /// # Errors
    ///
    /// Returns an error if the frequency or the diameter is not strictly positive.
    pub fn new(frequency: Frequency, diameter: Length) -> Result<Self, InputError> {
        let frequency = InputError::check_frequency(frequency)?;
        let diameter = StrictlyPositive::new(diameter)?.into_inner();
        Ok(Self {
            frequency,
            diameter,
        })
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    /// Uncorrected hole position, measured from the column start.
    #[must_use]
    pub fn theoretical_position(&self) -> Length {
        half_wavelength(self.frequency)
    }

    /// Effective pipe thickness while the hole is open.
    ///
    /// The air column extends past the hole edge by 3/4 of its diameter.
    #[must_use]
    pub fn open_thickness(&self, bore: &Bore) -> Length {
        bore.wall_thickness() + self.diameter * 0.75
    }

    /// Correction for a hole covered by a finger.
    ///
    /// Part of a covered hole stays free and shortens the physical column.
    #[must_use]
    pub fn closed_adjustment(&self, bore: &Bore) -> Length {
        let free_thickness = bore.wall_thickness() / 10.0;
        let diameter_ratio = (self.diameter / bore.inner_diameter()).get::<ratio>();
        free_thickness * diameter_ratio.powi(2)
    }
}

/// Hole diameters given to [`ToneHoles::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum HoleDiameters {
    /// One diameter shared by every hole.
    Uniform(Length),

    /// One diameter per hole, aligned with the frequencies as given.
    PerHole(Vec<Length>),
}

impl Default for HoleDiameters {
    fn default() -> Self {
        Self::Uniform(Length::new::<millimeter>(5.0))
    }
}

impl From<Length> for HoleDiameters {
    fn from(diameter: Length) -> Self {
        Self::Uniform(diameter)
    }
}

impl From<Vec<Length>> for HoleDiameters {
    fn from(diameters: Vec<Length>) -> Self {
        Self::PerHole(diameters)
    }
}

/// Tone holes ordered by ascending frequency.
///
/// The order is the physical order along the bore: the first hole is the
/// lowest-pitched one, farthest from the embouchure.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToneHoles(Vec<ToneHole>);

impl ToneHoles {
    /// Pairs frequencies with diameters and sorts the holes by frequency.
    ///
    /// Holes sharing a frequency are ordered by diameter.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::DiameterCountMismatch`] if per-hole diameters do
    /// not match the frequency count, or an error for any non-positive value.
    pub fn new(
        frequencies: Vec<Frequency>,
        diameters: impl Into<HoleDiameters>,
    ) -> Result<Self, InputError> {
        let diameters = match diameters.into() {
            HoleDiameters::Uniform(diameter) => vec![diameter; frequencies.len()],
            HoleDiameters::PerHole(diameters) => diameters,
        };

        if diameters.len() != frequencies.len() {
            return Err(InputError::DiameterCountMismatch {
                frequencies: frequencies.len(),
                diameters: diameters.len(),
            });
        }

        let mut holes = frequencies
            .into_iter()
            .zip(diameters)
            .map(|(frequency, diameter)| ToneHole::new(frequency, diameter))
            .collect::<Result<Vec<_>, _>>()?;

        holes.sort_by(|a, b| {
            let (a_hz, b_hz) = (a.frequency.get::<hertz>(), b.frequency.get::<hertz>());
            let (a_mm, b_mm) = (a.diameter.get::<millimeter>(), b.diameter.get::<millimeter>());
            a_hz.total_cmp(&b_hz).then(a_mm.total_cmp(&b_mm))
        });

        Ok(Self(holes))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ToneHole] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToneHole> {
        self.0.iter()
    }

    /// Sum of the closed-hole adjustments of every hole from index `first` on.
    #[must_use]
    pub fn closed_adjustment_from(&self, first: usize, bore: &Bore) -> Length {
        self.0
            .get(first..)
            .unwrap_or_default()
            .iter()
            .fold(Length::ZERO, |sum, hole| sum + hole.closed_adjustment(bore))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::acoustics::quena::core::test_support::{hz, mm, water_pipe};

    #[test]
    fn sorts_by_frequency_keeping_diameters_aligned() -> Result<(), InputError> {
        let holes = ToneHoles::new(
            vec![hz(660.0), hz(440.0), hz(550.0)],
            vec![mm(7.0), mm(10.0), mm(12.0)],
        )?;

        let frequencies: Vec<_> = holes.iter().map(ToneHole::frequency).collect();
        let diameters: Vec<_> = holes.iter().map(ToneHole::diameter).collect();

        assert_eq!(frequencies, [hz(440.0), hz(550.0), hz(660.0)]);
        assert_eq!(diameters, [mm(10.0), mm(12.0), mm(7.0)]);
        Ok(())
    }

    #[test]
    fn uniform_diameter_is_broadcast() -> Result<(), InputError> {
        let holes = ToneHoles::new(vec![hz(450.0), hz(650.0), hz(780.0)], mm(4.0))?;
        assert_eq!(holes.len(), 3);
        assert!(holes.iter().all(|hole| hole.diameter() == mm(4.0)));

        let defaulted = ToneHoles::new(vec![hz(450.0)], HoleDiameters::default())?;
        assert_eq!(defaulted.as_slice()[0].diameter(), mm(5.0));
        Ok(())
    }

    #[test]
    fn rejects_mismatched_diameters() {
        let result = ToneHoles::new(vec![hz(440.0), hz(550.0)], vec![mm(10.0)]);
        assert_eq!(
            result.unwrap_err(),
            InputError::DiameterCountMismatch {
                frequencies: 2,
                diameters: 1
            }
        );
    }

    #[test]
    fn rejects_invalid_holes() {
        assert!(matches!(
            ToneHoles::new(vec![hz(440.0), hz(0.0)], mm(10.0)),
            Err(InputError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            ToneHoles::new(vec![hz(440.0)], mm(-1.0)),
            Err(InputError::Constraint(_))
        ));
    }

    #[test]
    fn rejects_infinite_hole_frequency() {
        assert!(matches!(
            ToneHoles::new(vec![hz(f64::INFINITY)], mm(10.0)),
            Err(InputError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            ToneHole::new(hz(f64::INFINITY), mm(10.0)),
            Err(InputError::InvalidFrequency { .. })
        ));
    }

    #[test]
    fn empty_hole_list_is_valid() -> Result<(), InputError> {
        let holes = ToneHoles::new(Vec::new(), HoleDiameters::PerHole(Vec::new()))?;
        assert!(holes.is_empty());
        assert_eq!(holes.closed_adjustment_from(0, &water_pipe()), mm(0.0));
        Ok(())
    }

    #[test]
    fn hole_corrections() -> Result<(), InputError> {
        let bore = water_pipe();
        let hole = ToneHole::new(hz(400.0), mm(10.0))?;

        assert_relative_eq!(
            hole.open_thickness(&bore).get::<millimeter>(),
            11.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            hole.closed_adjustment(&bore).get::<millimeter>(),
            0.35 * (10.0_f64 / 18.0).powi(2),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            hole.theoretical_position().get::<millimeter>(),
            431.25,
            max_relative = 1e-12
        );
        Ok(())
    }

    #[test]
    fn closed_adjustment_sums_trailing_holes() -> Result<(), InputError> {
        let bore = water_pipe();
        let holes = ToneHoles::new(
            vec![hz(440.0), hz(550.0), hz(660.0)],
            vec![mm(9.0), mm(12.0), mm(6.0)],
        )?;
        let each: Vec<_> = holes
            .iter()
            .map(|hole| hole.closed_adjustment(&bore).get::<millimeter>())
            .collect();

        assert_relative_eq!(
            holes.closed_adjustment_from(0, &bore).get::<millimeter>(),
            each.iter().sum::<f64>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            holes.closed_adjustment_from(1, &bore).get::<millimeter>(),
            each[1] + each[2],
            max_relative = 1e-12
        );
        assert_eq!(holes.closed_adjustment_from(3, &bore), mm(0.0));
        assert_eq!(holes.closed_adjustment_from(7, &bore), mm(0.0));
        Ok(())
    }
}
