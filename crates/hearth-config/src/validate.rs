//! Validation rules for settings documents.

use crate::defaults::{LOG_FORMATS, LOG_LEVELS};
use crate::error::{ConfigError, ConfigResult};
use crate::model::HearthSettings;

/// Check every field of `settings`.
///
/// # Errors
///
/// Returns the first [`ConfigError::InvalidField`] encountered.
pub fn validate(settings: &HearthSettings) -> ConfigResult<()> {
    let base = settings.support.base_url()?;
    if !matches!(base.scheme(), "http" | "https") || base.cannot_be_a_base() {
        return Err(invalid(
            "support",
            "base_url",
            &settings.support.base_url,
            "must use http or https",
        ));
    }

    for (field, value) in [
        ("app_version", &settings.support.app_version),
        ("platform", &settings.support.platform),
        ("language", &settings.support.language),
    ] {
        require_non_empty("support", field, value)?;
    }

    settings.locale_code()?;

    let level = settings.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(invalid(
            "logging",
            "level",
            &settings.logging.level,
            "must be one of trace, debug, info, warn, error",
        ));
    }

    let format = settings.logging.format.to_ascii_lowercase();
    if !LOG_FORMATS.contains(&format.as_str()) {
        return Err(invalid(
            "logging",
            "format",
            &settings.logging.format,
            "must be pretty or json",
        ));
    }

    Ok(())
}

fn require_non_empty(section: &str, field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(invalid(section, field, value, "must not be empty"));
    }
    Ok(())
}

fn invalid(section: &str, field: &str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        section: section.to_string(),
        field: field.to_string(),
        value: Some(value.to_string()),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: &ConfigError) -> Option<(&str, &str)> {
        match err {
            ConfigError::InvalidField { section, field, .. } => {
                Some((section.as_str(), field.as_str()))
            }
            _ => None,
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&HearthSettings::default()).is_ok());
    }

    #[test]
    fn rejects_non_http_base() {
        let mut settings = HearthSettings::default();
        settings.support.base_url = "ftp://support.example/".to_string();
        let err = validate(&settings).expect_err("ftp base must fail");
        assert_eq!(field_of(&err), Some(("support", "base_url")));

        settings.support.base_url = "relative/path".to_string();
        let err = validate(&settings).expect_err("relative base must fail");
        assert_eq!(field_of(&err), Some(("support", "base_url")));
    }

    #[test]
    fn rejects_blank_support_segments() {
        let mut settings = HearthSettings::default();
        settings.support.platform = "  ".to_string();
        let err = validate(&settings).expect_err("blank platform must fail");
        assert_eq!(field_of(&err), Some(("support", "platform")));
    }

    #[test]
    fn rejects_unknown_logging_values() {
        let mut settings = HearthSettings::default();
        settings.logging.level = "loud".to_string();
        let err = validate(&settings).expect_err("unknown level must fail");
        assert_eq!(field_of(&err), Some(("logging", "level")));

        let mut settings = HearthSettings::default();
        settings.logging.format = "xml".to_string();
        let err = validate(&settings).expect_err("unknown format must fail");
        assert_eq!(field_of(&err), Some(("logging", "format")));
    }

    #[test]
    fn accepts_uppercase_level() {
        let mut settings = HearthSettings::default();
        settings.logging.level = "DEBUG".to_string();
        settings.logging.format = "JSON".to_string();
        assert!(validate(&settings).is_ok());
    }
}
