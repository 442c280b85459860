//! Document emitter (verb module)
//!
//! Serializes a finished `Pmml` document.

mod emit;
mod error;

pub use emit::{emit_json, emit_yaml};
pub use error::EmitError;
