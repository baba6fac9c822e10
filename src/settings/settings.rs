// Widget settings and loading
use serde::{Deserialize, Serialize};
use tracing::Level;

use crate::error::Result;

/// Page elements the widget binds to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementSettings {
    pub toggle_id: String,
    pub audio_id: String,
    pub song_attribute: String, // Attribute on the audio element naming the track
}

impl Default for ElementSettings {
    fn default() -> Self {
        Self {
            toggle_id: "aa-audio-btn".to_string(),
            audio_id: "aa-audio".to_string(),
            song_attribute: "data-song".to_string(),
        }
    }
}

/// Local storage keys for the persisted playback entries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub playing: String,
    pub time: String,
    pub song: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            playing: "aa_music_playing".to_string(),
            time: "aa_music_time".to_string(),
            song: "aa_music_song".to_string(),
        }
    }
}

/// Toggle styling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub playing_class: String,
    pub attention_class: String, // Cleared once playback starts
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            playing_class: "is-playing".to_string(),
            attention_class: "needs-attention".to_string(),
        }
    }
}

/// Playback behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    pub default_song: String,
    pub save_interval_ms: u32,
    pub interaction_events: Vec<String>,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            default_song: "main".to_string(),
            save_interval_ms: 500,
            // These fire before scrolling and count as user gestures in most browsers
            interaction_events: ["pointerdown", "mousedown", "touchstart", "keydown", "wheel", "click"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Main widget settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub version: i32, // Settings schema version for future migrations
    pub elements: ElementSettings,
    pub storage: StorageKeys,
    pub view: ViewSettings,
    pub playback: PlaybackSettings,
    pub log_level: Option<String>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            version: 1,
            elements: ElementSettings::default(),
            storage: StorageKeys::default(),
            view: ViewSettings::default(),
            playback: PlaybackSettings::default(),
            log_level: None,
        }
    }
}

impl WidgetSettings {
    /// Id of the inline JSON config element a host page may provide
    pub const CONFIG_ELEMENT_ID: &'static str = "aa-audio-config";

    /// Parse settings from the page's inline JSON, or return defaults if there is none
    pub fn load(source: Option<&str>) -> Result<Self> {
        let content = match source.map(str::trim) {
            Some(content) if !content.is_empty() => content,
            _ => {
                tracing::debug!("[Settings] No inline config found, using defaults");
                return Ok(Self::default());
            }
        };

        let settings: WidgetSettings = serde_json::from_str(content)?;
        tracing::debug!("[Settings] Loaded inline config (version {})", settings.version);
        Ok(settings)
    }

    /// Log level to install, `debug` in debug builds unless configured
    pub fn max_level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })
    }
}
