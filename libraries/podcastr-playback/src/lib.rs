//! Podcastr - Player State
//!
//! Episode playlist and player state for the Podcastr web front-end.
//!
//! This crate provides:
//! - Playlist loading (single episode or list with a start index)
//! - Play/pause, loop and shuffle flags
//! - Next/previous navigation and end-of-episode handling
//! - Random "next" under shuffle
//! - A shared, explicitly passed player context with change subscriptions
//! - WASM bindings for the browser (`wasm` feature)
//!
//! # Architecture
//!
//! `podcastr-playback` holds state only:
//! - No audio decoding (the browser's audio element plays the episode)
//! - No network access (episodes come from the data-fetching layer)
//! - No persistence
//!
//! [`PlayerState`] is the plain state machine. [`PlayerContext`] shares one
//! state between all UI consumers and notifies subscribers after changes.
//! A bare `PlayerState` queues its change events until
//! [`PlayerState::drain_events`] is called; the context drains them itself.
//!
//! # Example: Playlist Navigation
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerState};
//!
//! let episodes: Vec<Episode> = (1..=3)
//!     .map(|i| {
//!         Episode::new(
//!             format!("Episode {}", i),
//!             "Diego Fernandes",
//!             format!("https://example.com/{}.jpg", i),
//!             1800,
//!             format!("https://example.com/{}.mp3", i),
//!         )
//!     })
//!     .collect();
//!
//! let mut player = PlayerState::default();
//! player.play_list(episodes, 0).unwrap();
//! assert!(player.is_playing());
//!
//! player.play_next();
//! assert_eq!(player.current_index(), 1);
//!
//! player.play_previous();
//! assert!(!player.has_previous());
//!
//! // Without a context, events pile up until drained
//! assert!(player.has_pending_events());
//! player.drain_events();
//! ```
//!
//! # Example: Shuffle and Loop
//!
//! ```rust
//! use podcastr_playback::{Episode, PlayerConfig, PlayerState};
//!
//! let mut player = PlayerState::new(PlayerConfig {
//!     shuffle_seed: Some(42),
//!     ..Default::default()
//! });
//! player.play(Episode::new("Solo", "Host", "", 60, "https://example.com/solo.mp3"));
//!
//! player.toggle_shuffle();
//! player.toggle_loop();
//!
//! // Under shuffle there is always a "next", even with one episode
//! assert!(player.has_next());
//! player.play_next();
//! assert_eq!(player.current_index(), 0);
//! ```

mod context;
mod error;
mod events;
mod playlist;
mod shuffle;
mod state;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use context::{PlayerContext, SubscriptionId};
pub use error::{PlayerError, Result};
pub use events::PlayerEvent;
pub use playlist::Playlist;
pub use shuffle::ShufflePicker;
pub use state::PlayerState;
pub use types::{Episode, PlayerConfig, PlayerSnapshot};
