//! Acoustic resonator models.
//!
//! This module contains models for wind-instrument air columns: where to cut
//! the embouchure and the tone holes of a bore so it sounds at chosen
//! frequencies.

pub mod quena;
