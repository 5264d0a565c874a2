use uom::si::f64::Length;

/// A vibrating air column with an embouchure at one end.
///
/// Positions are measured from the start of the theoretical air column.
/// Implementors supply the end position and the embouchure correction;
/// the embouchure location follows from them.
pub trait AirColumn {
    /// Length of the ideal, uncorrected column.
    fn theoretical_length(&self) -> Length;

    /// Position of the physical pipe end.
    fn end_position(&self) -> Length;

    /// Distance the air column virtually extends past the embouchure.
    fn embouchure_correction(&self) -> Length;

    /// Physical embouchure location.
    fn embouchure_location(&self) -> Length {
        self.end_position() - self.embouchure_correction()
    }

    /// Distance between the start of the theoretical column and the embouchure.
    fn embouchure_offset(&self) -> Length {
        self.theoretical_length() - self.embouchure_location()
    }
}
