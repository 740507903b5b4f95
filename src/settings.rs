//! Player settings and gameplay tuning
//!
//! Persisted as JSON: LocalStorage on the web, a file beside the binary on
//! native. Scores are never persisted.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Throwing ===
    /// Launch impulse along the camera's view direction
    pub throw_power: f32,
    /// Ball sphere radius (meters)
    pub ball_radius: f32,
    /// Seconds before a thrown ball is removed
    pub ball_lifetime_secs: f32,

    // === Scanning ===
    /// Opacity of the marker over detected walls (0.0 - 1.0)
    pub plane_overlay_opacity: f32,

    // === HUD ===
    /// Show renderer statistics (fps, timing)
    pub show_statistics: bool,
    /// Vibrate on a scored hit
    pub haptics: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            throw_power: THROW_POWER,
            ball_radius: BALL_RADIUS,
            ball_lifetime_secs: BALL_LIFETIME_SECS,

            plane_overlay_opacity: PLANE_OVERLAY_OPACITY,

            show_statistics: true,
            haptics: true,
        }
    }
}

impl Settings {
    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the host should vibrate after a contact event
    pub fn vibrate_for_hit(&self, scored: bool) -> bool {
        scored && self.haptics
    }

    /// Replace out-of-range values with defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.throw_power.is_finite() && self.throw_power > 0.0) {
            log::warn!("Invalid throw_power {}, using {}", self.throw_power, defaults.throw_power);
            self.throw_power = defaults.throw_power;
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            log::warn!("Invalid ball_radius {}, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.ball_lifetime_secs.is_finite() && self.ball_lifetime_secs > 0.0) {
            log::warn!(
                "Invalid ball_lifetime_secs {}, using {}",
                self.ball_lifetime_secs,
                defaults.ball_lifetime_secs
            );
            self.ball_lifetime_secs = defaults.ball_lifetime_secs;
        }
        if !self.plane_overlay_opacity.is_finite() {
            self.plane_overlay_opacity = defaults.plane_overlay_opacity;
        }
        self.plane_overlay_opacity = self.plane_overlay_opacity.clamp(0.0, 1.0);
        self
    }

    /// Storage key (LocalStorage item on web, file name on native)
    const STORAGE_KEY: &'static str = "hoop_shot_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                },
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        let path = Self::default_path();
        if let Err(e) = self.save_to(&path) {
            log::warn!("Failed to save settings to {}: {}", path.display(), e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default_path() -> std::path::PathBuf {
        std::path::PathBuf::from(format!("{}.json", Self::STORAGE_KEY))
    }

    /// Load from a JSON file; a missing or corrupt file yields defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_game_constants() {
        let settings = Settings::default();
        assert_eq!(settings.throw_power, 5.0);
        assert_eq!(settings.ball_radius, 0.125);
        assert_eq!(settings.plane_overlay_opacity, 0.25);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "throw_power": 7.5, "haptics": false }"#).unwrap();
        assert_eq!(settings.throw_power, 7.5);
        assert!(!settings.haptics);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_invalid_values_sanitized() {
        let settings = Settings::from_json(
            r#"{ "throw_power": -1.0, "ball_radius": 0.0, "plane_overlay_opacity": 3.0 }"#,
        )
        .unwrap();
        assert_eq!(settings.throw_power, THROW_POWER);
        assert_eq!(settings.ball_radius, BALL_RADIUS);
        assert_eq!(settings.plane_overlay_opacity, 1.0);
    }

    #[test]
    fn test_vibrate_only_on_hit_with_haptics() {
        let mut settings = Settings::default();
        assert!(settings.vibrate_for_hit(true));
        assert!(!settings.vibrate_for_hit(false));
        settings.haptics = false;
        assert!(!settings.vibrate_for_hit(true));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_round_trip_and_missing_file() {
        let dir = std::env::temp_dir().join(format!("hoop_shot_settings_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        assert_eq!(Settings::load_from(&path), Settings::default());

        let settings = Settings {
            ball_lifetime_secs: 4.0,
            show_statistics: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
