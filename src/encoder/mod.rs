//! Document encoder (verb module)
//!
//! Registries + final model → PMML document.

mod base;
mod error;
mod sklearn;

pub use base::{DocumentEncoder, ModelEncoder};
pub use error::EncodeError;
pub use sklearn::SkLearnEncoder;
