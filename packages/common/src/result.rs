use crate::error::ShapeError;

/// Common Result type alias
pub type ShapeResult<T> = Result<T, ShapeError>;
