//! Configuration for the workshop exercises
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::WorkshopError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Credential file used by save, load and the demo
    pub credential_file: PathBuf,
    /// Guessing game configuration
    pub guessing: GuessingConfig,
}

/// Guessing game configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessingConfig {
    /// Smallest target, inclusive
    pub min: i64,
    /// Largest target, inclusive
    pub max: i64,
    /// Input line that ends the game
    pub sentinel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            credential_file: PathBuf::from("secret.txt"),
            guessing: GuessingConfig::default(),
        }
    }
}

impl Default for GuessingConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 9,
            sentinel: "exit".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, WorkshopError> {
        let mut config = Self {
            debug: args.debug,
            ..Self::default()
        };

        // Override with command-specific options
        match &args.command {
            Some(crate::cli::Command::Guess { min, max }) => {
                config.guessing.min = *min;
                config.guessing.max = *max;
            }
            Some(crate::cli::Command::Save { file, .. })
            | Some(crate::cli::Command::Load { file, .. }) => {
                config.credential_file = file.clone();
            }
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), WorkshopError> {
        if self.guessing.min > self.guessing.max {
            return Err(WorkshopError::config(format!(
                "Guess range is empty: {} > {}",
                self.guessing.min, self.guessing.max
            )));
        }

        if self.guessing.sentinel.is_empty() {
            return Err(WorkshopError::config("Exit sentinel must not be empty"));
        }

        if self.credential_file.as_os_str().is_empty() {
            return Err(WorkshopError::config("Credential file path must not be empty"));
        }

        Ok(())
    }
}
