use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::Length;

/// Straight cylindrical pipe an instrument is cut from.
///
/// Both the inner diameter and the wall thickness are guaranteed to be
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bore {
    inner_diameter: Length,
    wall_thickness: Length,
}

impl Bore {
    /// Constructs a validated bore.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not strictly positive.
    pub fn new(inner_diameter: Length, wall_thickness: Length) -> ConstraintResult<Self> {
        let inner_diameter = StrictlyPositive::new(inner_diameter)?;
        let wall_thickness = StrictlyPositive::new(wall_thickness)?;
        Ok(Self::from_constrained(inner_diameter, wall_thickness))
    }

    /// Constructs a bore from pre-validated dimensions.
    #[must_use]
    pub fn from_constrained(
        inner_diameter: Constrained<Length, StrictlyPositive>,
        wall_thickness: Constrained<Length, StrictlyPositive>,
    ) -> Self {
        Self {
            inner_diameter: inner_diameter.into_inner(),
            wall_thickness: wall_thickness.into_inner(),
        }
    }

    /// Constructs a bore without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both dimensions are strictly positive.
    /// Violating this invariant will produce meaningless corrections.
    #[must_use]
    pub fn new_unchecked(inner_diameter: Length, wall_thickness: Length) -> Self {
        Self {
            inner_diameter,
            wall_thickness,
        }
    }

    /// Returns the inner diameter of the pipe.
    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.inner_diameter
    }

    /// Returns the wall thickness of the pipe.
    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.wall_thickness
    }

    /// End correction of the open pipe end.
    ///
    /// The vibrating air column extends past the open end by roughly
    /// `0.8` times the inner diameter.
    #[must_use]
    pub fn end_correction(&self) -> Length {
        self.inner_diameter * 0.8
    }
}
