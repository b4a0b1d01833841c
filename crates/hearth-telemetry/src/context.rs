//! Process span carrying the running command and build.

use tracing::Span;
use tracing::span::Entered;

use crate::init::build_sha;

/// Keeps the `hearth` span entered until dropped.
///
/// The span is leaked so the guard can be held for the whole process.
pub struct GlobalContextGuard {
    _entered: Entered<'static>,
}

impl GlobalContextGuard {
    /// Enter a span tagged with `command` and the build identifier.
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        let command = command.into();
        let span: &'static Span = Box::leak(Box::new(tracing::info_span!(
            "hearth",
            command = %command,
            build_sha = %build_sha()
        )));
        Self {
            _entered: span.enter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_enters_and_exits() {
        let guard = GlobalContextGuard::new("menu");
        drop(guard);
    }
}
