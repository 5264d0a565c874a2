//! Supporting utilities used by models.
//!
//! - [`acoustics`]: Ideal air-column relationships shared by resonator models.
//! - [`constraint`]: Type-level numeric constraints for validated inputs.

pub mod acoustics;
pub mod constraint;
