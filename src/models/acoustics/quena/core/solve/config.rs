use uom::si::{f64::Length, length::millimeter};

/// Solver configuration for tone-hole placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Maximum fixed-point iteration count per hole.
    pub max_iters: usize,

    /// A hole position is accepted once two successive iterates differ by no
    /// more than this length.
    pub tolerance: Length,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            tolerance: Length::new::<millimeter>(0.00001),
        }
    }
}
