//! Tracing subscriber setup.
//!
//! Events go to stderr so stdout stays clean for the summary report and the
//! terminal viewer.

use tracing::Level;
use tracing_subscriber::{
    fmt::{layer, writer::MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::AppError;

/// Install the global subscriber. `None` disables logging entirely.
pub fn setup_logging(min_level: Option<Level>) -> Result<(), AppError> {
    let Some(level) = min_level else {
        return Ok(());
    };

    tracing_subscriber::registry()
        .with(
            layer()
                .with_writer(std::io::stderr.with_max_level(level))
                .compact()
                .with_line_number(false)
                .with_thread_ids(false)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| AppError::runtime(format!("Failed to install logger: {e}")))
}

/// Run `f` with every tracing event discarded on this thread.
pub fn without_logging<T>(f: impl FnOnce() -> T) -> T {
    tracing::subscriber::with_default(tracing::subscriber::NoSubscriber::default(), f)
}
