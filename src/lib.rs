//! # Quena Models
//!
//! Bore, embouchure and tone-hole models for end-blown wind instruments,
//! built as [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! Given a straight pipe and the frequencies an instrument should sound, the
//! models tell where to cut the embouchure and drill the tone holes. An ideal
//! half-wavelength air column is corrected for the open end, the embouchure,
//! an optional end ring, and open and closed tone holes.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Units
//!
//! All physical quantities are [`uom`] quantities. Instruments are usually
//! specified in millimetres and hertz, and every reference value in this crate
//! is given in those units.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Note: Only utilities at the crate-level (in [`support`]) and the types
//! re-exported by each model module are part of the public API.

pub mod models;
pub mod support;
