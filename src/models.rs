//! Public instrument models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `acoustics`)
//! based on an opinionated taxonomy. This organization may evolve as more
//! models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported wholesale; the model module
//! re-exports the types callers need.
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate
//! to the model-specific core API. A single `core` may be exposed through
//! multiple adapters (e.g., different wrapper types implementing `Model`).

pub mod acoustics;
