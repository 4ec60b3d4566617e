//! WASM-compatible player wrapper

use super::types::WasmEpisode;
use crate::{Episode, PlayerConfig, PlayerContext, PlayerError, SubscriptionId};
use js_sys::Function;
use wasm_bindgen::prelude::*;

/// WASM-compatible player
///
/// Wraps a [`PlayerContext`] with a JavaScript-friendly API. Method names
/// follow the front-end's existing player hook (`playList`, `togglePlay`,
/// `handleEpisodeEnded`, ...).
#[wasm_bindgen]
pub struct WasmPlayer {
    context: PlayerContext,

    // Registered change callback
    on_change: Option<SubscriptionId>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        Self::from_context(PlayerContext::default())
    }

    /// Create a player from a config object (camelCase keys, all optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let config: PlayerConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;

        Ok(Self::from_context(PlayerContext::new(config)))
    }

    // ===== Loading =====

    /// Play a single episode
    pub fn play(&mut self, episode: WasmEpisode) {
        self.context.play(episode.into());
    }

    /// Play a list of episode objects starting at `index`
    #[wasm_bindgen(js_name = playList)]
    pub fn play_list(&mut self, list: JsValue, index: usize) -> Result<(), JsValue> {
        let wasm_episodes: Vec<WasmEpisode> = serde_wasm_bindgen::from_value(list)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse episodes: {}", e)))?;

        let episodes: Vec<Episode> = wasm_episodes.into_iter().map(Episode::from).collect();

        self.context
            .play_list(episodes, index)
            .map_err(to_js_error)
    }

    // ===== Flags =====

    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&mut self) {
        self.context.toggle_play();
    }

    #[wasm_bindgen(js_name = toggleLoop)]
    pub fn toggle_loop(&mut self) {
        self.context.toggle_loop();
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.context.toggle_shuffle();
    }

    /// Set playing flag from the audio element's play/pause events
    #[wasm_bindgen(js_name = setPlayingState)]
    pub fn set_playing_state(&mut self, state: bool) {
        self.context.set_playing_state(state);
    }

    // ===== Navigation =====

    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.context.play_next();
    }

    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.context.play_previous();
    }

    /// Call from the audio element's `ended` event
    #[wasm_bindgen(js_name = handleEpisodeEnded)]
    pub fn handle_episode_ended(&mut self) {
        self.context.handle_episode_ended();
    }

    // ===== State Queries =====

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.context.has_next()
    }

    #[wasm_bindgen(js_name = hasPrevious)]
    pub fn has_previous(&self) -> bool {
        self.context.has_previous()
    }

    #[wasm_bindgen(js_name = currentEpisodeIndex)]
    pub fn current_episode_index(&self) -> usize {
        self.context.current_index()
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.context.is_playing()
    }

    #[wasm_bindgen(js_name = isLooping)]
    pub fn is_looping(&self) -> bool {
        self.context.is_looping()
    }

    #[wasm_bindgen(js_name = isShuffling)]
    pub fn is_shuffling(&self) -> bool {
        self.context.is_shuffling()
    }

    /// Get loaded episodes as an array of plain objects
    #[wasm_bindgen(js_name = episodeList)]
    pub fn episode_list(&self) -> JsValue {
        let episodes: Vec<WasmEpisode> = self
            .context
            .episodes()
            .iter()
            .map(WasmEpisode::from)
            .collect();

        serde_wasm_bindgen::to_value(&episodes).unwrap_or(JsValue::NULL)
    }

    /// Get the current episode, or `undefined` when nothing is loaded
    #[wasm_bindgen(js_name = currentEpisode)]
    pub fn current_episode(&self) -> Option<WasmEpisode> {
        self.context
            .current_episode()
            .as_ref()
            .map(WasmEpisode::from)
    }

    /// Get the whole player state as one object
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.context.snapshot()).unwrap_or(JsValue::NULL)
    }

    // ===== Event Listeners =====

    /// Register change callback, replacing any previous one
    ///
    /// The callback receives each event as `{ type: "...", ... }`.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        if let Some(previous) = self.on_change.take() {
            self.context.unsubscribe(previous);
        }

        let id = self.context.subscribe(move |event| {
            if let Ok(value) = serde_wasm_bindgen::to_value(event) {
                callback.call1(&JsValue::NULL, &value).ok();
            }
        });
        self.on_change = Some(id);
    }

    /// Reset the player and drop the change callback
    pub fn teardown(&mut self) {
        self.on_change = None;
        self.context.teardown();
    }
}

impl WasmPlayer {
    fn from_context(context: PlayerContext) -> Self {
        Self {
            context,
            on_change: None,
        }
    }

    /// Handle to the underlying context, for Rust-side consumers
    pub fn context(&self) -> &PlayerContext {
        &self.context
    }
}

/// Default implementation
impl Default for WasmPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(error: PlayerError) -> JsValue {
    JsValue::from_str(&error.to_string())
}
