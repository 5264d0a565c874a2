//! Iterative tone-hole placement.
//!
//! Each hole's open-hole correction depends on its own position and on the
//! position of its downstream neighbour (the pipe end for the first hole),
//! so positions are found by fixed-point iteration, one hole at a time from
//! the lowest frequency up.

mod config;
mod error;

pub use config::SolverConfig;
pub use error::{Infeasibility, SolveError};

use uom::si::{f64::Length, length::millimeter, ratio::ratio};

use super::{AirColumn, Quena};

/// A converged hole position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct SolvedHole {
    /// Position measured from the start of the air column.
    pub(super) position: Length,

    /// Iterations needed to converge.
    pub(super) iters: usize,

    /// Difference between the accepted iterate and the one before it.
    pub(super) last_step: Length,
}

/// Places every tone hole of `quena`.
///
/// Holes are solved strictly in index order: each one measures its distance
/// to the already accepted position of the previous hole.
///
/// # Errors
///
/// Returns [`SolveError`] for infeasible geometry or if a hole does not
/// converge within `config.max_iters` iterations.
pub(super) fn solve(quena: &Quena, config: &SolverConfig) -> Result<Vec<SolvedHole>, SolveError> {
    let bore = quena.bore();
    let end_position = quena.end_position();
    let mut solved: Vec<SolvedHole> = Vec::with_capacity(quena.holes().len());

    for (index, hole) in quena.holes().iter().enumerate() {
        let target = hole.theoretical_position() - quena.closed_adjustment_from(index + 1);
        let thickness = hole.open_thickness(bore);
        let downstream = solved.last().map(|previous| previous.position);

        let next = |position: Length| -> Result<Length, Infeasibility> {
            let open_correction = match downstream {
                None => {
                    let diameter_ratio = (hole.diameter() / bore.inner_diameter()).get::<ratio>();
                    first_hole_correction(end_position - position, thickness, diameter_ratio)?
                }
                Some(previous) => {
                    let diameter_ratio = (bore.inner_diameter() / hole.diameter()).get::<ratio>();
                    open_hole_correction(previous - position, thickness, diameter_ratio)?
                }
            };
            Ok(target - open_correction)
        };

        solved.push(fixed_point(index, config, next)?);
    }

    Ok(solved)
}

/// Iterates `next` from a zero position until two successive iterates agree
/// within the configured tolerance.
fn fixed_point(
    hole: usize,
    config: &SolverConfig,
    next: impl Fn(Length) -> Result<Length, Infeasibility>,
) -> Result<SolvedHole, SolveError> {
    let mut position = Length::new::<millimeter>(0.0);
    let mut delta = Length::new::<millimeter>(f64::INFINITY);

    for iter in 1..=config.max_iters {
        let candidate = next(position)
            .and_then(|candidate| {
                if candidate.get::<millimeter>().is_finite() {
                    Ok(candidate)
                } else {
                    Err(Infeasibility::NonFinite)
                }
            })
            .map_err(|cause| SolveError::InfeasibleGeometry { hole, cause })?;

        delta = (candidate - position).abs();
        position = candidate;

        if delta <= config.tolerance {
            return Ok(SolvedHole {
                position,
                iters: iter,
                last_step: delta,
            });
        }
    }

    Err(SolveError::NotConverged {
        hole,
        iters: config.max_iters,
        delta,
    })
}

/// Open-hole correction of the first hole, whose downstream reference is the
/// pipe end at `distance`.
fn first_hole_correction(
    distance: Length,
    thickness: Length,
    diameter_ratio: f64,
) -> Result<Length, Infeasibility> {
    check_distance(distance)?;
    let denominator = diameter_ratio.powi(2) + (thickness / distance).get::<ratio>();
    Ok(thickness / denominator)
}

/// Open-hole correction of a hole at `distance` from the previous hole.
///
/// `bore_ratio` is the bore diameter over the hole diameter.
fn open_hole_correction(
    distance: Length,
    thickness: Length,
    bore_ratio: f64,
) -> Result<Length, Infeasibility> {
    check_distance(distance)?;
    let radicand = 1.0 + 4.0 * (thickness / distance).get::<ratio>() * bore_ratio.powi(2);
    if radicand < 0.0 {
        return Err(Infeasibility::NegativeRadicand { radicand });
    }
    Ok(distance * 0.5 * (radicand.sqrt() - 1.0))
}

fn check_distance(distance: Length) -> Result<(), Infeasibility> {
    if distance.get::<millimeter>() <= 0.0 {
        Err(Infeasibility::NonPositiveDistance { distance })
    } else {
        Ok(())
    }
}
