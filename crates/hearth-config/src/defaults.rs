//! Default values for settings fields.
//!
//! # Design
//! - Keep defaults in one place so serde defaults and docs stay consistent.

/// Support article root.
pub const SUPPORT_BASE_URL: &str = "https://support.mozilla.org/1/mobile";
/// App version embedded in support URLs.
pub const APP_VERSION: &str = "131.0";
/// Platform segment embedded in support URLs.
pub const PLATFORM: &str = "iOS";
/// Language segment embedded in support URLs.
pub const LANGUAGE: &str = "en-US";
/// Menu string locale.
pub const LOCALE: &str = "en";
/// Default log level.
pub const LOG_LEVEL: &str = "info";
/// Default log format.
pub const LOG_FORMAT: &str = "pretty";

/// Log levels accepted by the `logging.level` field.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
/// Log formats accepted by the `logging.format` field.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
