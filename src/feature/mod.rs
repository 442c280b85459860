//! Feature types (noun module)
//!
//! What pipeline steps hand to each other and to the encoder.

mod feature;
mod schema;
mod transformer;

pub use feature::{Feature, FeatureKind};
pub use schema::{Label, Schema};
pub use transformer::{Transformer, TypeDeclaration};
