//! Model chain errors

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    /// A chain needs at least one model
    #[error("Cannot build a model chain from zero models")]
    EmptyChain,
}
