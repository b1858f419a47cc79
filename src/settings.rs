//! Playground settings
//!
//! Presentation preferences and the random ranges used by forms and the
//! physics sandbox. Persisted in LocalStorage on the web; the scene itself is
//! never saved.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::scene::{IntRange, Outline, SpawnRanges};

/// Ranges the cube form draws its next defaults from after a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeFormRanges {
    pub length: IntRange,
    /// Applied independently to x, y and z
    pub axis: IntRange,
}

impl Default for CubeFormRanges {
    fn default() -> Self {
        Self {
            length: IntRange::new(CUBE_LENGTH_MIN, CUBE_LENGTH_MAX),
            axis: IntRange::new(CUBE_AXIS_MIN, CUBE_AXIS_MAX),
        }
    }
}

/// Playground settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Drawing ===
    /// Whether square and face outlines repeat their first corner
    pub outline: Outline,
    /// Draw x/y/z guides at the origin
    pub show_axes: bool,
    pub axis_length: f32,
    /// Radius of the marker drawn for each free point
    pub point_marker_size: f32,
    /// Segments per circle when outlining sphere bodies
    pub sphere_segments: u32,

    // === Randomness ===
    /// Fixed RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
    pub spawn: SpawnRanges,
    pub cube_form: CubeFormRanges,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            outline: Outline::Closed,
            show_axes: true,
            axis_length: AXIS_LENGTH,
            point_marker_size: POINT_MARKER_SIZE,
            sphere_segments: SPHERE_SEGMENTS,

            seed: None,
            spawn: SpawnRanges::default(),
            cube_form: CubeFormRanges::default(),
        }
    }
}

fn check_range(name: &'static str, range: IntRange) -> Result<(), ConfigError> {
    if range.is_ordered() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            name,
            min: range.min,
            max: range.max,
        })
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}

/// Log the outcome of a storage write. Returns whether it succeeded.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn log_save_result<E: std::fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => {
            log::info!("Settings saved");
            true
        }
        Err(e) => {
            log::warn!("Settings not saved: {e:?}");
            false
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check every range is ordered and every size is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("spawn.position", self.spawn.position)?;
        check_range("spawn.size", self.spawn.size)?;
        check_range("spawn.mass", self.spawn.mass)?;
        check_range("cube_form.length", self.cube_form.length)?;
        check_range("cube_form.axis", self.cube_form.axis)?;
        check_positive("axis_length", self.axis_length)?;
        check_positive("point_marker_size", self.point_marker_size)?;
        if self.sphere_segments < 3 {
            return Err(ConfigError::InvalidValue {
                name: "sphere_segments",
                value: self.sphere_segments as f32,
            });
        }
        Ok(())
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "geo_playground_settings";

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
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
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
                Ok(json) => {
                    log_save_result(storage.set_item(Self::STORAGE_KEY, &json));
                }
                Err(e) => log::warn!("Settings not saved: {e}"),
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
