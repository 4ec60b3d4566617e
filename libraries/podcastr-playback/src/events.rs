//! Player Events
//!
//! Event-based communication so UI consumers can re-render after a change.
//! Events are queued only when an observable value actually changes:
//! - Playlist loaded or cleared
//! - Current episode changed (navigation or shuffle)
//! - Playing, looping or shuffling flag flipped
//! - Context torn down

use serde::{Deserialize, Serialize};

/// Events emitted by the player state
///
/// Serialized with an internal `type` tag and camelCase names, which is the
/// shape JavaScript listeners receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PlayerEvent {
    /// A new playlist replaced the previous one
    PlaylistLoaded {
        /// Number of episodes in the new playlist
        length: usize,
        /// Starting position
        index: usize,
    },

    /// Playlist was exhausted or reset; nothing is loaded anymore
    PlaylistCleared,

    /// The current episode changed
    EpisodeChanged {
        /// New position in the playlist
        index: usize,
        /// Title of the episode now current
        title: String,
    },

    /// Playing flag changed
    PlayingChanged { is_playing: bool },

    /// Loop flag changed
    LoopingChanged { is_looping: bool },

    /// Shuffle flag changed
    ShufflingChanged { is_shuffling: bool },

    /// The shared context was torn down; listeners are dropped after this
    TornDown,
}
