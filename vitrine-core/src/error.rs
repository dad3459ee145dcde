use thiserror::Error;

/// Errors returned by explicit carousel requests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("index {index} is out of bounds for {len} products")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("carousel is not mounted")]
    Unmounted,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
