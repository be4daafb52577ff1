//! Game settings and preferences
//!
//! Read once at start-up from LocalStorage (web) or a JSON file (native).
//! Never written back.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH};
use crate::sim::Arena;

/// Colour themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Classic,
    HighContrast,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::HighContrast => "HighContrast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "highcontrast" | "high-contrast" | "contrast" => Some(Theme::HighContrast),
            _ => None,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Classic => Palette {
                background: "#23262e",
                net: "#444",
                paddle: "#fff",
                ball: "#f6d32d",
            },
            Theme::HighContrast => Palette {
                background: "#000",
                net: "#888",
                paddle: "#fff",
                ball: "#ff0",
            },
        }
    }
}

/// CSS colour strings used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub net: &'static str,
    pub paddle: &'static str,
    pub ball: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena width; on the web the canvas size wins
    pub arena_width: f32,
    pub arena_height: f32,
    pub theme: Theme,
    /// Fixed RNG seed, or a time-based one when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            theme: Theme::Classic,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Playable arena, falling back to the default size
    pub fn arena(&self) -> Arena {
        let arena = Arena::new(self.arena_width, self.arena_height);
        if arena.is_playable() {
            arena
        } else {
            log::warn!(
                "Arena {}x{} is too small, using {}x{}",
                self.arena_width,
                self.arena_height,
                DEFAULT_ARENA_WIDTH,
                DEFAULT_ARENA_HEIGHT
            );
            Arena::default()
        }
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "paddle_pong_settings";

    /// Environment variable naming a settings file (native only)
    pub const PATH_ENV: &'static str = "PADDLE_PONG_SETTINGS";

    /// Parse `json`, logging and falling back to defaults on failure
    fn parse_or_default(json: &str, source: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::parse_or_default(&json, "LocalStorage");
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from the file named by `PADDLE_PONG_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::PATH_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse_or_default(&json, &path),
            Err(e) => {
                log::warn!("Could not read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}
