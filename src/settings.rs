//! Listing settings
//!
//! Bundles the output directory, palette and app text. Defaults reproduce the
//! stock listing; an optional `config/store_listing.json` can override any
//! field.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::{OUTPUT_DIR, SETTINGS_FILE};
use crate::error::{AssetError, AssetResult};
use crate::metadata::AppMetadata;
use crate::palettes::Palette;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingSettings {
    /// Directory receiving the generated files (created if absent)
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub metadata: AppMetadata,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(OUTPUT_DIR),
            palette: Palette::default(),
            metadata: AppMetadata::default(),
        }
    }
}

impl ListingSettings {
    /// Load settings from the settings file, or return defaults if it doesn't exist
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using built-in listing", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::from_json_str(&content) {
                Ok(settings) => {
                    info!("Loaded listing settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json_str(content: &str) -> AssetResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| AssetError::settings(format!("failed to parse listing settings: {e}")))
    }

    /// Same settings writing into a different directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_listing() {
        let settings = ListingSettings::default();
        assert_eq!(settings.output_dir, PathBuf::from("play_store_assets"));
        assert_eq!(settings.metadata.name, "StudyFlow");
        assert_eq!(settings.palette.primary, [66, 133, 244]);
        assert_eq!(settings.metadata.description.len(), 5);
    }

    #[test]
    fn partial_json_overrides_only_given_fields() {
        let settings = ListingSettings::from_json_str(
            r#"{ "output_dir": "out", "metadata": { "name": "Planner" } }"#,
        )
        .unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.metadata.name, "Planner");
        assert_eq!(settings.metadata.monogram, "SF");
        assert_eq!(settings.palette, Palette::default());
    }

    #[test]
    fn malformed_json_is_a_settings_error() {
        let err = ListingSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, AssetError::Settings(_)));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ListingSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(settings, ListingSettings::default());
    }

    #[test]
    fn unparseable_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store_listing.json");
        fs::write(&path, "[1, 2").unwrap();
        assert_eq!(ListingSettings::load_from(&path), ListingSettings::default());
    }

    #[test]
    fn output_dir_only_moves_when_the_file_sets_it() {
        let dir = tempfile::tempdir().unwrap();
        let absent = ListingSettings::load_from(&dir.path().join(SETTINGS_FILE));
        assert_eq!(absent.output_dir, PathBuf::from(OUTPUT_DIR));

        let path = dir.path().join("store_listing.json");
        fs::write(&path, r#"{ "output_dir": "listing_out" }"#).unwrap();
        let redirected = ListingSettings::load_from(&path);
        assert_eq!(redirected.output_dir, PathBuf::from("listing_out"));
        assert_eq!(redirected.palette, Palette::default());
        assert_eq!(redirected.metadata, AppMetadata::default());
    }

    #[test]
    fn file_settings_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store_listing.json");
        fs::write(&path, r#"{ "palette": { "primary": [10, 20, 30] } }"#).unwrap();
        let settings = ListingSettings::load_from(&path);
        assert_eq!(settings.palette.primary, [10, 20, 30]);
    }
}
