//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web build; native uses defaults. These
//! only steer presentation - the simulation never reads them.

use serde::{Deserialize, Serialize};

/// Presentation preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Opacity of the per-frame fade overlay that produces motion trails.
    /// Lower values leave longer trails; 1.0 disables trails entirely.
    pub trail_fade: f64,
    /// Paint particle bursts (the simulation still spawns them)
    pub particles: bool,
    /// Reduced motion: full clear each frame instead of trails
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trail_fade: 0.1,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective overlay opacity (respects reduced_motion)
    pub fn effective_trail_fade(&self) -> f64 {
        if self.reduced_motion { 1.0 } else { self.trail_fade }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "hue_siege_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
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
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_trails() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_trail_fade(), 0.1);
        settings.reduced_motion = true;
        assert_eq!(settings.effective_trail_fade(), 1.0);
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            trail_fade: 0.25,
            particles: false,
            reduced_motion: true,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.trail_fade, 0.25);
        assert!(!back.particles);
        assert!(back.reduced_motion);
    }
}
