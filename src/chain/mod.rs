//! Model chain builder (verb module)
//!
//! Models → one mining model with `modelChain` segmentation.

mod build;
mod error;

pub use build::{create_model_chain, derive_mining_schema};
pub use error::ChainError;
