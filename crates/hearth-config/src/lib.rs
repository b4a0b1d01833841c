#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! File and environment backed settings for the Hearth menu tooling.
//!
//! Layout: `model.rs` (typed settings document), `defaults.rs` (default
//! values), `validate.rs` (validation rules), `loader.rs` (JSON loading and
//! environment overrides), `error.rs` (error types).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{apply_env_overrides, load, load_from_path, load_from_str};
pub use model::{HearthSettings, LoggingSettings, SupportSettings};
pub use validate::validate;
