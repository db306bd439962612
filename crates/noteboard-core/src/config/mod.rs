//! Settings file handling.
//!
//! Settings live in a JSON file under the platform config directory. The
//! path can be overridden with `NOTEBOARD_SETTINGS`. A missing file means
//! defaults; a broken file is reported and the host falls back to defaults.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::models::Settings;
use crate::{Error, Result};

const SETTINGS_FILE: &str = "settings.json";
const SETTINGS_PATH_ENV: &str = "NOTEBOARD_SETTINGS";

/// Resolve where settings are read from.
pub fn default_settings_path() -> PathBuf {
    settings_path_from(std::env::var_os(SETTINGS_PATH_ENV))
}

/// Pick the settings path, preferring a non-empty override.
pub fn settings_path_from(override_path: Option<OsString>) -> PathBuf {
    if let Some(path) = override_path.filter(|value| !value.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("noteboard")
        .join(SETTINGS_FILE)
}

/// Load settings from the default location, falling back to defaults.
pub fn load_settings() -> Settings {
    load_settings_or_default(&default_settings_path())
}

/// Load settings from `path`; any failure is logged and yields defaults.
pub fn load_settings_or_default(path: &Path) -> Settings {
    match load_settings_from_path(path) {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(
                "Failed to load settings from {}: {}",
                path.display(),
                error
            );
            Settings::default()
        }
    }
}

/// Load settings from `path`. A missing file yields defaults.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!("No settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parse and validate a settings payload.
pub fn parse_settings(payload: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(payload)?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<()> {
    if settings.preview_chars == 0 {
        return Err(Error::InvalidSettings(
            "preview_chars must be greater than zero".to_string(),
        ));
    }
    if settings.font_size == 0 {
        return Err(Error::InvalidSettings(
            "font_size must be greater than zero".to_string(),
        ));
    }
    if settings.font_family.trim().is_empty() {
        return Err(Error::InvalidSettings(
            "font_family must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn loads_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"theme":"light","preview_chars":40}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.theme, ThemeMode::Light);
        assert_eq!(settings.preview_chars, 40);
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn override_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("custom.json");
        assert_eq!(settings_path_from(Some(custom.clone().into_os_string())), custom);
    }

    #[test]
    fn empty_override_falls_back_to_config_dir() {
        let path = settings_path_from(Some(OsString::new()));
        assert_eq!(path, settings_path_from(None));
        assert!(path.ends_with(Path::new("noteboard").join(SETTINGS_FILE)));
    }

    #[test]
    fn broken_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{not json").unwrap();

        assert_eq!(load_settings_or_default(&path), Settings::default());
    }

    #[test]
    fn invalid_values_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"theme":"dark","preview_chars":0}"#).unwrap();

        assert_eq!(load_settings_or_default(&path), Settings::default());
    }

    #[test]
    fn rejects_malformed_json() {
        let error = parse_settings("{not json").unwrap_err();
        assert!(matches!(error, Error::Serialization(_)));
    }

    #[test]
    fn rejects_unknown_fields() {
        let error = parse_settings(r#"{"sync_url":"https://example.com"}"#).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_zero_preview_length() {
        let error = parse_settings(r#"{"preview_chars":0}"#).unwrap_err();
        assert!(matches!(error, Error::InvalidSettings(_)));
    }

    #[test]
    fn rejects_blank_font_family() {
        let error = parse_settings(r#"{"font_family":"  "}"#).unwrap_err();
        assert!(error.to_string().contains("font_family"));
    }
}
