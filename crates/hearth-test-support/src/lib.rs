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

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (sites and environments), mocks.rs (recording collaborators), assert.rs (menu assertions).

pub mod assert;
pub mod fixtures;
pub mod mocks;
