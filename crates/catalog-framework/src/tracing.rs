//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber. Collections and
//! records emit their diagnostics through `tracing` macros with structured fields
//! (`kind`, `id`, `size`, `error`), so a rejected add or a refused status change shows
//! up as a single `WARN` line carrying the offending id.
//!
//! ## Configuration
//!
//! Verbosity comes from the `RUST_LOG` environment variable; the line layout from
//! [`LogFormat`].
//!
//! ```bash
//! RUST_LOG=info cargo run       # progress lines
//! RUST_LOG=debug cargo run      # full record payloads on every add
//! ```
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO Added kind="user" id=S001 size=1
//! INFO Added kind="book" id=BK001 size=1
//! WARN Add failed kind="book" error=book BK001 already exists
//! INFO Removed kind="book" id=BK001 size=0
//! ```

use tracing_subscriber::EnvFilter;

/// Output layout for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Span context inline, no module paths.
    #[default]
    Compact,
    /// The default multi-field `tracing-subscriber` layout.
    Full,
}

/// Installs the global subscriber. Call once, at the top of `main`.
///
/// Falls back to `info` when `RUST_LOG` is unset.
pub fn setup_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false); // Don't show module paths - `kind` already says what's logging

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Full => builder.init(),
    }
}
