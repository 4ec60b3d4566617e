//! WASM bindings for podcastr-playback
//!
//! This module provides WebAssembly bindings for the shared player context,
//! so the web front-end can drive the player state from JavaScript.

pub mod player;
pub mod types;

pub use player::WasmPlayer;
pub use types::WasmEpisode;
