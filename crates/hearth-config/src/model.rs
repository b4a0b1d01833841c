//! Typed settings document.
//!
//! # Design
//! - Pure data carriers; loading and validation live in sibling modules.
//! - Every field has a default so an empty document is valid.

use hearth_menu::{LocaleCode, SupportUrlResolver};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults;
use crate::error::{ConfigError, ConfigResult};

/// Root settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HearthSettings {
    /// Help article URL composition.
    pub support: SupportSettings,
    /// Locale used for menu strings.
    pub locale: String,
    /// Log output settings.
    pub logging: LoggingSettings,
}

impl Default for HearthSettings {
    fn default() -> Self {
        Self {
            support: SupportSettings::default(),
            locale: defaults::LOCALE.to_string(),
            logging: LoggingSettings::default(),
        }
    }
}

impl HearthSettings {
    /// Locale for menu strings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the locale is not bundled.
    pub fn locale_code(&self) -> ConfigResult<LocaleCode> {
        LocaleCode::from_lang_tag(&self.locale).ok_or_else(|| ConfigError::InvalidField {
            section: "root".to_string(),
            field: "locale".to_string(),
            value: Some(self.locale.clone()),
            reason: "unsupported locale",
        })
    }

    /// Resolver for help article URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the base URL does not parse.
    pub fn support_resolver(&self) -> ConfigResult<SupportUrlResolver> {
        let base = self.support.base_url()?;
        Ok(SupportUrlResolver::new(
            base,
            self.support.app_version.clone(),
            self.support.platform.clone(),
            self.support.language.clone(),
        ))
    }
}

/// Help article URL composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupportSettings {
    /// Support site root.
    pub base_url: String,
    /// App version segment.
    pub app_version: String,
    /// Platform segment.
    pub platform: String,
    /// Language segment.
    pub language: String,
}

impl Default for SupportSettings {
    fn default() -> Self {
        Self {
            base_url: defaults::SUPPORT_BASE_URL.to_string(),
            app_version: defaults::APP_VERSION.to_string(),
            platform: defaults::PLATFORM.to_string(),
            language: defaults::LANGUAGE.to_string(),
        }
    }
}

impl SupportSettings {
    /// Parsed support site root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the URL does not parse.
    pub fn base_url(&self) -> ConfigResult<Url> {
        Url::parse(&self.base_url).map_err(|_| ConfigError::InvalidField {
            section: "support".to_string(),
            field: "base_url".to_string(),
            value: Some(self.base_url.clone()),
            reason: "must be an absolute URL",
        })
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    /// Level filter used when `RUST_LOG` is unset.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            format: defaults::LOG_FORMAT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_menu::{SupportTopic, SupportTopicResolver};

    #[test]
    fn defaults_build_a_working_resolver() -> ConfigResult<()> {
        let settings = HearthSettings::default();
        let resolver = settings.support_resolver()?;
        let url = resolver.url_for_topic(SupportTopic::SponsoredContent);
        assert_eq!(
            url.as_ref().map(Url::as_str),
            Some("https://support.mozilla.org/1/mobile/131.0/iOS/en-US/sponsor-privacy")
        );
        assert_eq!(settings.locale_code()?, LocaleCode::En);
        Ok(())
    }

    #[test]
    fn unsupported_locale_is_rejected() {
        let settings = HearthSettings {
            locale: "ja".to_string(),
            ..HearthSettings::default()
        };
        assert!(matches!(
            settings.locale_code(),
            Err(ConfigError::InvalidField { ref field, .. }) if field == "locale"
        ));
    }
}
