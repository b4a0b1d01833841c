//! Settings loading from JSON documents and the process environment.
//!
//! # Design
//! - Order: defaults, then the optional file, then `HEARTH_*` variables, then validation.
//! - Environment lookup is injected so overrides can be tested without touching
//!   process state.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::model::HearthSettings;
use crate::validate::validate;

/// Log level override.
pub const ENV_LOG_LEVEL: &str = "HEARTH_LOG_LEVEL";
/// Log format override.
pub const ENV_LOG_FORMAT: &str = "HEARTH_LOG_FORMAT";
/// Menu locale override.
pub const ENV_LOCALE: &str = "HEARTH_LOCALE";
/// Support base URL override.
pub const ENV_SUPPORT_BASE_URL: &str = "HEARTH_SUPPORT_BASE_URL";
/// App version override.
pub const ENV_APP_VERSION: &str = "HEARTH_APP_VERSION";

/// Parse and validate a JSON settings document.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed documents and
/// [`ConfigError::InvalidField`] when validation fails.
pub fn load_from_str(document: &str) -> ConfigResult<HearthSettings> {
    let settings = parse(document)?;
    validate(&settings)?;
    Ok(settings)
}

/// Read, parse, and validate a JSON settings file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read, otherwise the
/// errors of [`load_from_str`].
pub fn load_from_path(path: &Path) -> ConfigResult<HearthSettings> {
    let document = read(path)?;
    load_from_str(&document)
}

/// Load settings from an optional file and the process environment.
///
/// # Errors
///
/// Returns any read, parse, or validation error.
pub fn load(path: Option<&Path>) -> ConfigResult<HearthSettings> {
    let mut settings = match path {
        Some(path) => parse(&read(path)?)?,
        None => HearthSettings::default(),
    };
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    validate(&settings)?;
    Ok(settings)
}

/// Overlay `HEARTH_*` values returned by `lookup` onto `settings`.
///
/// Blank values are ignored.
pub fn apply_env_overrides(settings: &mut HearthSettings, lookup: impl Fn(&str) -> Option<String>) {
    let targets: [(&str, &mut String); 5] = [
        (ENV_LOG_LEVEL, &mut settings.logging.level),
        (ENV_LOG_FORMAT, &mut settings.logging.format),
        (ENV_LOCALE, &mut settings.locale),
        (ENV_SUPPORT_BASE_URL, &mut settings.support.base_url),
        (ENV_APP_VERSION, &mut settings.support.app_version),
    ];
    for (key, target) in targets {
        if let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) {
            debug!(key, "applying settings override from environment");
            *target = value;
        }
    }
}

fn parse(document: &str) -> ConfigResult<HearthSettings> {
    serde_json::from_str(document).map_err(|source| ConfigError::Parse { source })
}

fn read(path: &Path) -> ConfigResult<String> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn empty_document_uses_defaults() -> ConfigResult<()> {
        assert_eq!(load_from_str("{}")?, HearthSettings::default());
        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            load_from_str(r#"{"colour": "blue"}"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            load_from_str(r#"{"support": {"host": "x"}}"#),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn env_overrides_replace_fields() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_LOG_LEVEL, "debug"),
            (ENV_LOCALE, "fr"),
            (ENV_APP_VERSION, " "),
        ]);
        let mut settings = HearthSettings::default();
        apply_env_overrides(&mut settings, |key| env.get(key).map(ToString::to_string));

        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.locale, "fr");
        assert_eq!(settings.support.app_version, "131.0");
        assert_eq!(settings.logging.format, "pretty");
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/missing/hearth.json");
        match load_from_path(path) {
            Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
