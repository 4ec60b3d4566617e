//! Player state - core orchestration
//!
//! Owns the playlist, the current position and the playing/looping/shuffling
//! flags, and implements every transition the UI can trigger.

use crate::{
    error::Result,
    events::PlayerEvent,
    playlist::Playlist,
    shuffle::ShufflePicker,
    types::{Episode, PlayerConfig, PlayerSnapshot},
};
use tracing::{debug, trace, warn};

/// Central player state
///
/// Holds:
/// - Playlist (idle, or loaded with a current index)
/// - Playing, looping and shuffling flags (independent of each other)
/// - Shuffle generator
/// - Pending events for UI synchronization
///
/// Looping is only stored and toggled here; repeating the current episode is
/// up to whatever drives the audio element.
///
/// Every change queues a [`PlayerEvent`]. [`PlayerContext`](crate::PlayerContext)
/// drains the queue after each operation; when using `PlayerState` on its
/// own, call [`PlayerState::drain_events`] regularly or the queue keeps
/// growing.
#[derive(Debug, Clone)]
pub struct PlayerState {
    config: PlayerConfig,

    playlist: Playlist,

    // Flags
    is_playing: bool,
    is_looping: bool,
    is_shuffling: bool,

    shuffle: ShufflePicker,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerState {
    /// Create idle player state
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            playlist: Playlist::Idle,
            is_playing: false,
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            shuffle: ShufflePicker::new(config.shuffle_seed, config.shuffle_avoids_current),
            pending_events: Vec::new(),
            config,
        }
    }

    // ===== Loading =====

    /// Play a single episode
    ///
    /// Replaces any loaded playlist with just this episode and starts playing.
    pub fn play(&mut self, episode: Episode) {
        debug!(title = episode.title(), "Playing single episode");
        self.load(Playlist::single(episode));
    }

    /// Play `episodes`, starting at `index`
    ///
    /// Fails without touching the state if the list is empty or the index
    /// is out of range.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) -> Result<()> {
        let len = episodes.len();
        let playlist = Playlist::loaded(episodes, index).map_err(|e| {
            warn!(index, len, "Rejected playlist: {}", e);
            e
        })?;

        debug!(index, len, "Playing playlist");
        self.load(playlist);
        Ok(())
    }

    fn load(&mut self, playlist: Playlist) {
        self.playlist = playlist;
        self.emit_playlist_loaded();
        self.emit_episode_changed();
        self.set_playing(true);
    }

    // ===== Flags =====

    /// Flip the playing flag
    pub fn toggle_play(&mut self) {
        self.set_playing(!self.is_playing);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!(is_looping = self.is_looping, "Loop toggled");
        self.pending_events.push(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!(is_shuffling = self.is_shuffling, "Shuffle toggled");
        self.pending_events.push(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    /// Set the playing flag explicitly
    ///
    /// Used when the audio element reports play/pause on its own.
    pub fn set_playing_state(&mut self, state: bool) {
        self.set_playing(state);
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing == is_playing {
            return;
        }

        self.is_playing = is_playing;
        debug!(is_playing, "Playing state changed");
        self.pending_events
            .push(PlayerEvent::PlayingChanged { is_playing });
    }

    // ===== Navigation =====

    /// Move to the next episode
    ///
    /// Under shuffle, jumps to a random episode of the whole playlist.
    /// Otherwise steps forward one, or does nothing at the end of the list.
    pub fn play_next(&mut self) {
        let (len, current) = match &self.playlist {
            Playlist::Idle => {
                trace!("Next ignored: nothing loaded");
                return;
            }
            Playlist::Loaded { episodes, index } => (episodes.len(), *index),
        };

        if self.is_shuffling {
            let target = self.shuffle.pick(len, current);
            self.select(target);
        } else if self.playlist.advance() {
            debug!(index = self.playlist.index(), "Moved to next episode");
            self.emit_episode_changed();
        } else {
            trace!(current, "Next ignored: end of playlist");
        }
    }

    /// Move to the previous episode, or do nothing at the start of the list
    pub fn play_previous(&mut self) {
        if !self.playlist.has_preceding() {
            trace!("Previous ignored: start of playlist");
            return;
        }

        if self.playlist.go_back() {
            debug!(index = self.playlist.index(), "Moved to previous episode");
            self.emit_episode_changed();
        }
    }

    /// Handle natural end of the current episode
    ///
    /// Advances like [`PlayerState::play_next`] when there is a next episode.
    /// Otherwise the playlist is cleared; the playing flag is only reset when
    /// [`PlayerConfig::stop_when_exhausted`] is set.
    pub fn handle_episode_ended(&mut self) {
        if self.has_next() {
            self.play_next();
            return;
        }

        if self.playlist.clear() {
            debug!("Playlist exhausted, clearing");
            self.pending_events.push(PlayerEvent::PlaylistCleared);
        }

        if self.config.stop_when_exhausted {
            self.set_playing(false);
        }
    }

    fn select(&mut self, target: usize) {
        if self.playlist.select(target) {
            debug!(index = target, "Moved to episode");
            self.emit_episode_changed();
        } else {
            trace!(index = target, "Episode unchanged");
        }
    }

    // ===== State Queries =====

    /// Whether an episode precedes the current one
    pub fn has_previous(&self) -> bool {
        self.playlist.has_preceding()
    }

    /// Whether "next" would do something
    ///
    /// Always true under shuffle, even with a single episode.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.playlist.has_following()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Loaded episodes in playback order
    pub fn episodes(&self) -> &[Episode] {
        self.playlist.episodes()
    }

    /// Current position (0 when nothing is loaded)
    pub fn current_index(&self) -> usize {
        self.playlist.index()
    }

    pub fn current_episode(&self) -> Option<&Episode> {
        self.playlist.current()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether nothing is loaded
    pub fn is_idle(&self) -> bool {
        self.playlist.is_idle()
    }

    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Owned copy of everything a consumer renders from
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            episode_list: self.episodes().to_vec(),
            current_episode_index: self.current_index(),
            current_episode: self.current_episode().cloned(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
        }
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// Returns every event queued since the last drain, oldest first.
    /// Standalone users are responsible for calling this; the context does
    /// it after every operation.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn emit_playlist_loaded(&mut self) {
        self.pending_events.push(PlayerEvent::PlaylistLoaded {
            length: self.playlist.len(),
            index: self.playlist.index(),
        });
    }

    fn emit_episode_changed(&mut self) {
        if let Some(episode) = self.playlist.current() {
            let event = PlayerEvent::EpisodeChanged {
                index: self.playlist.index(),
                title: episode.title().to_string(),
            };
            self.pending_events.push(event);
        }
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
