//! Collaborator seams
//!
//! The core never presents anything itself. Toasts, routing and click
//! handling belong to the embedding UI, which plugs in through these
//! traits. Plain closures work for all of them.

use std::sync::Arc;

/// Receives user-facing error messages (toast)
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> ErrorReporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Navigates to the add-product screen
pub trait Navigator: Send + Sync {
    fn navigate(&self);
}

impl<F> Navigator for F
where
    F: Fn() + Send + Sync,
{
    fn navigate(&self) {
        self()
    }
}

/// Receives category clicks
pub trait SelectHandler: Send + Sync {
    fn on_select(&self, id: &str);
}

impl<F> SelectHandler for F
where
    F: Fn(&str) + Send + Sync,
{
    fn on_select(&self, id: &str) {
        self(id)
    }
}

pub type SharedReporter = Arc<dyn ErrorReporter>;
pub type SharedNavigator = Arc<dyn Navigator>;
pub type SharedSelectHandler = Arc<dyn SelectHandler>;

/// Forward `message` to the reporter when one is attached, and log it
pub(crate) fn report_to(reporter: Option<&SharedReporter>, message: &str) {
    tracing::warn!(reason = message, "operation rejected");
    if let Some(reporter) = reporter {
        reporter.report(message);
    }
}
