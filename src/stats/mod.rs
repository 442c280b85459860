//! Statistics builders (verb module)
//!
//! Column values → `UnivariateStats`, ready for `SkLearnEncoder::put_univariate_stats`.

mod compute;

pub use compute::{categorical_stats, continuous_stats};
