//! Loaded playlist representation
//!
//! A playlist is either idle (nothing loaded) or loaded with a non-empty
//! list of episodes and a cursor into it. Keeping the two apart means the
//! cursor only exists while it has something to point at.

use crate::error::{PlayerError, Result};
use crate::types::Episode;

/// Playlist with a current position
///
/// ```text
/// Idle
/// ─────────────────────────────
/// Loaded:
///     Episode A
///   > Episode B   (index = 1)
///     Episode C
/// ```
///
/// `Loaded` values built through [`Playlist::single`] and
/// [`Playlist::loaded`] always hold at least one episode and an index
/// inside the list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Playlist {
    /// Nothing loaded
    #[default]
    Idle,

    /// Episodes loaded for playback, in playback order
    Loaded { episodes: Vec<Episode>, index: usize },
}

impl Playlist {
    /// Playlist holding exactly one episode
    pub fn single(episode: Episode) -> Self {
        Self::Loaded {
            episodes: vec![episode],
            index: 0,
        }
    }

    /// Playlist starting at `index`
    ///
    /// Fails if `episodes` is empty or `index` is past its end.
    pub fn loaded(episodes: Vec<Episode>, index: usize) -> Result<Self> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        if index >= episodes.len() {
            return Err(PlayerError::IndexOutOfBounds {
                index,
                len: episodes.len(),
            });
        }
        Ok(Self::Loaded { episodes, index })
    }

    /// Whether nothing is loaded
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Episodes in playback order (empty when idle)
    pub fn episodes(&self) -> &[Episode] {
        match self {
            Self::Idle => &[],
            Self::Loaded { episodes, .. } => episodes,
        }
    }

    /// Current position (0 when idle)
    pub fn index(&self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Loaded { index, .. } => *index,
        }
    }

    pub fn len(&self) -> usize {
        self.episodes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes().is_empty()
    }

    /// Episode at the current position
    pub fn current(&self) -> Option<&Episode> {
        match self {
            Self::Idle => None,
            Self::Loaded { episodes, index } => episodes.get(*index),
        }
    }

    /// Whether an episode follows the current one in list order
    pub fn has_following(&self) -> bool {
        self.index() + 1 < self.len()
    }

    /// Whether an episode precedes the current one in list order
    pub fn has_preceding(&self) -> bool {
        self.index() > 0
    }

    /// Move the cursor to `target`
    ///
    /// Returns true if the cursor moved. Out-of-range targets and idle
    /// playlists are left alone.
    pub fn select(&mut self, target: usize) -> bool {
        match self {
            Self::Loaded { episodes, index } if target < episodes.len() && target != *index => {
                *index = target;
                true
            }
            _ => false,
        }
    }

    /// Step forward one episode, returning true if the cursor moved
    pub fn advance(&mut self) -> bool {
        self.select(self.index() + 1)
    }

    /// Step back one episode, returning true if the cursor moved
    pub fn go_back(&mut self) -> bool {
        match self.index().checked_sub(1) {
            Some(target) => self.select(target),
            None => false,
        }
    }

    /// Drop all episodes, returning true if anything was loaded
    pub fn clear(&mut self) -> bool {
        !std::mem::take(self).is_idle()
    }
}
