//! Mail client integration.
//!
//! Hands a `mailto:` link to the desktop opener, the terminal counterpart
//! of clicking the user's name in the details modal.

use anyhow::{Context, Result};
use std::process::{Command, Stdio};

/// Openers tried in order: freedesktop, then macOS.
const OPENERS: [&str; 2] = ["xdg-open", "open"];

/// Build a `mailto:` URL for an address.
pub fn mailto_url(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Open the default mail client for `email`.
///
/// # Returns
/// * `Result<()>` - Success once an opener was spawned
///
/// # Details
/// Does not wait for the opener; its output is discarded so it cannot
/// draw over the UI.
pub fn open_mailto(email: &str) -> Result<()> {
    let url = mailto_url(email);

    for opener in OPENERS {
        let spawned = Command::new(opener)
            .arg(&url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(_) => {
                tracing::info!(opener, %url, "opened mail client");
                return Ok(());
            }
            Err(e) => tracing::debug!(opener, error = %e, "opener unavailable"),
        }
    }

    Err(anyhow::anyhow!("No opener found ({})", OPENERS.join(", ")))
        .with_context(|| format!("Failed to open {}", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mailto_url() {
        assert_eq!(mailto_url(" Sincere@april.biz "), "mailto:Sincere@april.biz");
    }
}
