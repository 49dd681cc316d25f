//! Command-line argument parsing and validation

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Workshop basics - four small programming exercises
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "workshop")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Exercise to run; runs the full demonstration when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every exercise in sequence
    Demo,

    /// Print whether a number is even or odd
    Parity {
        /// Number to classify
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Play the guessing game until "exit" is entered
    Guess {
        /// Smallest possible target
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        min: i64,

        /// Largest possible target
        #[arg(long, default_value_t = 9, allow_negative_numbers = true)]
        max: i64,
    },

    /// Print whether text reads the same backwards
    Palindrome {
        /// Text to check
        text: String,
    },

    /// Encode and store a username and password
    Save {
        /// Credential file
        #[arg(short = 'f', long = "file", default_value = "secret.txt")]
        file: PathBuf,

        /// Username to store
        username: String,

        /// Password to store
        password: String,
    },

    /// Print stored credentials, optionally replacing the password
    Load {
        /// Credential file
        #[arg(short = 'f', long = "file", default_value = "secret.txt")]
        file: PathBuf,

        /// New password to store in place of the current one
        #[arg(long = "new-password")]
        new_password: Option<String>,
    },
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
