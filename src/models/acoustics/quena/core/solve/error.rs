use thiserror::Error;
use uom::si::f64::Length;

/// Errors that can occur while placing tone holes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// An open-hole correction could not be evaluated for this hole.
    ///
    /// This usually means the hole is too small for its spacing, or holes
    /// are too close together.
    #[error("failed to compute open hole correction for hole {hole}: {cause}")]
    InfeasibleGeometry {
        /// Index of the offending hole, in ascending-frequency order.
        hole: usize,

        /// Which part of the correction broke down.
        cause: Infeasibility,
    },

    /// The fixed-point iteration hit its limit without settling.
    #[error("hole {hole} did not converge within {iters} iterations: last step={delta:?}")]
    NotConverged {
        /// Index of the hole being solved.
        hole: usize,

        /// Iteration count performed.
        iters: usize,

        /// Difference between the last two iterates.
        delta: Length,
    },
}

/// Reason an open-hole correction is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Infeasibility {
    /// The hole sits at or past its downstream reference: the pipe end for
    /// the first hole, the previous hole otherwise.
    #[error("non-positive distance to downstream reference: {distance:?}")]
    NonPositiveDistance { distance: Length },

    /// The spacing makes the correction's square-root argument negative.
    #[error("negative radicand: {radicand}")]
    NegativeRadicand { radicand: f64 },

    /// The correction evaluated to NaN or an infinite length.
    #[error("correction is not finite")]
    NonFinite,
}
