use thiserror::Error;

use crate::reveal::tracker::Region;

/// Reasons a region could not be put under viewport observation.
///
/// None of these reach the user; callers log them and leave the region static.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObserveError {
    #[error("viewport observation is not available: {0}")]
    Unsupported(String),

    #[error("region `{0}` has no rendered element to observe")]
    MissingBoundary(Region),

    #[error("observer was already torn down")]
    Detached,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown region `{0}`")]
pub struct UnknownRegion(pub String);
