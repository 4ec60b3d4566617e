//! Error types for player state management

use thiserror::Error;

/// Player errors
///
/// Every navigation and toggle operation is total; only loading a
/// playlist with an explicit start index can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Attempted to load a playlist with no episodes
    #[error("Cannot load an empty playlist")]
    EmptyPlaylist,

    /// Start index does not point into the playlist
    #[error("Index {index} out of bounds for playlist of {len} episodes")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
