//! WASM-compatible type definitions

use crate::Episode;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// WASM-compatible episode
///
/// Mirrors [`Episode`] with JS-friendly types (`u32` seconds instead of
/// `u64`, which would surface as a `BigInt`). Deserializes from the plain
/// episode objects the front-end already holds.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[wasm_bindgen]
pub struct WasmEpisode {
    title: String,
    members: String,
    thumbnail: String,
    duration: u32,
    url: String,
}

#[wasm_bindgen]
impl WasmEpisode {
    /// Create a new episode
    #[wasm_bindgen(constructor)]
    pub fn new(
        title: String,
        members: String,
        thumbnail: String,
        duration: u32,
        url: String,
    ) -> Self {
        Self {
            title,
            members,
            thumbnail,
            duration,
            url,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn members(&self) -> String {
        self.members.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn thumbnail(&self) -> String {
        self.thumbnail.clone()
    }

    /// Length in seconds
    #[wasm_bindgen(getter)]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[wasm_bindgen(getter)]
    pub fn url(&self) -> String {
        self.url.clone()
    }
}

impl From<&Episode> for WasmEpisode {
    fn from(episode: &Episode) -> Self {
        Self {
            title: episode.title().to_string(),
            members: episode.members().to_string(),
            thumbnail: episode.thumbnail().to_string(),
            duration: u32::try_from(episode.duration_secs()).unwrap_or(u32::MAX),
            url: episode.url().to_string(),
        }
    }
}

impl From<WasmEpisode> for Episode {
    fn from(episode: WasmEpisode) -> Self {
        Episode::new(
            episode.title,
            episode.members,
            episode.thumbnail,
            u64::from(episode.duration),
            episode.url,
        )
    }
}
