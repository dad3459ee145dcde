use thiserror::Error;

/// Errors produced by model constructors and parsers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("image reference is empty")]
    EmptyImageRef,

    #[error("invalid image url {raw}: {reason}")]
    InvalidImageUrl { raw: String, reason: String },

    #[error("product id is empty")]
    EmptyProductId,

    #[error("invalid price {0}: must be a finite, non-negative amount")]
    InvalidPrice(f64),

    #[error("price {0:?} is not a number")]
    UnparseablePrice(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
