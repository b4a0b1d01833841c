//! Localized menu titles.
//!
//! # Design
//! - Locale files are compiled in and flattened to dotted keys once per bundle.
//! - Lookups fall through the active locale, then English, then the caller's
//!   literal, so a missing key never blanks a row.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::LazyLock;

use serde_json::{Map, Value};
use tracing::warn;

/// Locales with bundled menu strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// German.
    De,
    /// English.
    En,
    /// Spanish.
    Es,
    /// French.
    Fr,
}

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

impl LocaleCode {
    /// Every bundled locale.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::De, Self::En, Self::Es, Self::Fr]
    }

    /// Primary language subtag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }

    /// Resolve a BCP 47 style tag (`fr-CA`, `de_DE`) by its language subtag.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let language = tag.trim().split(['-', '_']).next()?;
        Self::all()
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(language))
    }

    const fn source(self) -> &'static str {
        match self {
            Self::De => include_str!("../../i18n/de.json"),
            Self::En => include_str!("../../i18n/en.json"),
            Self::Es => include_str!("../../i18n/es.json"),
            Self::Fr => include_str!("../../i18n/fr.json"),
        }
    }
}

impl Display for LocaleCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.tag())
    }
}

impl FromStr for LocaleCode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_lang_tag(value).ok_or_else(|| format!("unsupported locale '{value}'"))
    }
}

static ENGLISH: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

/// Flattened strings for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranslationBundle {
    locale: LocaleCode,
    entries: HashMap<String, String>,
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl TranslationBundle {
    /// Load the compiled-in strings for `locale`.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let mut entries = HashMap::new();
        match serde_json::from_str::<Value>(locale.source()) {
            Ok(Value::Object(root)) => flatten("", &root, &mut entries),
            Ok(_) => warn!(%locale, "locale file is not a JSON object"),
            Err(error) => warn!(%locale, %error, "locale file did not parse"),
        }
        Self { locale, entries }
    }

    /// Locale backing this bundle.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Number of keys this locale translates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the locale file provided no strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// String for a dotted `key`, falling back to English and then `default`.
    #[must_use]
    pub fn text(&self, key: &str, default: &str) -> String {
        self.entries
            .get(key)
            .or_else(|| ENGLISH.entries.get(key))
            .map_or_else(|| default.to_string(), Clone::clone)
    }
}

fn flatten(prefix: &str, node: &Map<String, Value>, entries: &mut HashMap<String, String>) {
    for (name, value) in node {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            Value::String(text) => {
                entries.insert(key, text.clone());
            }
            Value::Object(children) => flatten(&key, children, entries),
            _ => {}
        }
    }
}
