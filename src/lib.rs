//! # Workshop Basics
//!
//! Four small, independent programming exercises packaged as a library and
//! a `workshop` binary.
//!
//! ## Features
//!
//! - Even/odd reporting
//! - An interactive number guessing loop ended by the `exit` sentinel
//! - A palindrome check by paired index scan
//! - A two-line credential file with base64-encoded values
//!
//! ## Example
//!
//! ```no_run
//! use workshop_basics::core::CredentialStore;
//!
//! let store = CredentialStore::new();
//! store.save("secret.txt", "naitian", "p4ssw0rd")?;
//! store.load("secret.txt", None, &mut std::io::stdout())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout is reserved for exercise output.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
