//! Core types for the episode player

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single playable episode
///
/// Episodes arrive from the data-fetching layer as camelCase JSON and are
/// never modified afterwards, so fields are only exposed through getters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    title: String,

    /// Credited contributors, as a display string
    members: String,

    /// Cover image URL
    thumbnail: String,

    /// Length in whole seconds
    duration: u64,

    /// Audio resource URL
    url: String,
}

impl Episode {
    pub fn new(
        title: impl Into<String>,
        members: impl Into<String>,
        thumbnail: impl Into<String>,
        duration_secs: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            members: members.into(),
            thumbnail: thumbnail.into(),
            duration: duration_secs,
            url: url.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn members(&self) -> &str {
        &self.members
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Episode length in seconds, as supplied by the feed
    pub fn duration_secs(&self) -> u64 {
        self.duration
    }

    /// Episode length
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }
}

/// Configuration for the player state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Clear the playing flag when the last episode ends (default: false)
    ///
    /// When off, an exhausted playlist leaves `is_playing` untouched.
    pub stop_when_exhausted: bool,

    /// Never let shuffle pick the episode that is already current (default: false)
    ///
    /// Only applies to playlists with more than one episode.
    pub shuffle_avoids_current: bool,

    /// Seed for the shuffle generator (default: None, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

/// Owned view of everything a UI consumer reads from the player
///
/// Field names serialize in camelCase so the snapshot can be handed to a
/// JavaScript front-end unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub current_episode: Option<Episode>,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert!(!config.looping);
        assert!(!config.shuffling);
        assert!(!config.stop_when_exhausted);
        assert!(!config.shuffle_avoids_current);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{ "stopWhenExhausted": true, "shuffleSeed": 7 }"#).unwrap();

        assert!(config.stop_when_exhausted);
        assert_eq!(config.shuffle_seed, Some(7));
        assert!(!config.looping);
        assert!(!config.shuffle_avoids_current);
    }

    #[test]
    fn episode_from_feed_json() {
        let json = r#"{
            "title": "O que é Clean Code?",
            "members": "Diego e Richard",
            "thumbnail": "https://example.com/thumb.jpg",
            "duration": 3981,
            "url": "https://example.com/episode.m4a"
        }"#;

        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.title(), "O que é Clean Code?");
        assert_eq!(episode.members(), "Diego e Richard");
        assert_eq!(episode.duration_secs(), 3981);
        assert_eq!(episode.duration(), Duration::from_secs(3981));
        assert_eq!(episode.url(), "https://example.com/episode.m4a");
    }

    #[test]
    fn snapshot_uses_camel_case_keys() {
        let snapshot = PlayerSnapshot {
            episode_list: Vec::new(),
            current_episode_index: 0,
            current_episode: None,
            is_playing: true,
            is_looping: false,
            is_shuffling: false,
            has_previous: false,
            has_next: false,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["currentEpisodeIndex"], 0);
        assert_eq!(value["isPlaying"], true);
        assert!(value["episodeList"].as_array().unwrap().is_empty());
        assert!(value["currentEpisode"].is_null());
    }
}
