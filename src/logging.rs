use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};

use crate::SearchOptions;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(options: &SearchOptions) -> &'static str {
    if options.verbose { "d2cmate=debug" } else { "d2cmate=info" }
}

fn env_filter(options: &SearchOptions) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(options)))
}

/// Human-readable logs on stderr, for the one-shot command line.
pub fn init_stderr(options: &SearchOptions) {
    tracing_subscriber::registry()
        .with(env_filter(options))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// JSON lines appended to `path`. The terminal UI owns the screen, so this is
/// the only place its logs can go.
pub fn init_file(path: &Path, options: &SearchOptions) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(options))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_follows_verbose_option() {
        let quiet = SearchOptions::default();
        let verbose = SearchOptions {
            verbose: true,
            ..SearchOptions::default()
        };

        assert_eq!(default_directive(&quiet), "d2cmate=info");
        assert_eq!(default_directive(&verbose), "d2cmate=debug");
    }
}
