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
#![allow(clippy::redundant_pub_crate)]

//! Command line previewer for homepage context menus.
//!
//! Layout:
//! - `cli.rs`: argument parsing and command dispatch
//! - `preview.rs`: menu construction and simulated taps
//! - `error.rs`: CLI error type and exit codes
//! - `output.rs`: renderers
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod error;
pub(crate) mod output;
pub(crate) mod preview;

pub use cli::run;
