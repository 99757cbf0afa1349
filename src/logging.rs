//! Tracing setup.
//!
//! The terminal belongs to the UI, so events go to a log file instead of
//! stderr.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the level filter.
///
/// # Details
/// `RUST_LOG` wins over the configured default directive.
fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Initialize tracing to append to `path`.
///
/// # Arguments
/// * `path` - Log file, created along with its parent directory
/// * `default_directive` - Filter used when `RUST_LOG` is unset (e.g. `info`)
pub fn init_tracing(path: &Path, default_directive: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_filter(env_filter(default_directive)),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(log_file = %path.display(), "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_tracing_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("todo-tui.log");
        // A subscriber may already be installed by another test in this process.
        let _ = init_tracing(&path, "debug");
        assert!(path.exists());
    }
}
