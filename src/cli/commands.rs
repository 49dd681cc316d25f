//! Command implementations for the CLI

use crate::{
    cli::Command,
    config::Config,
    core::{CredentialStore, GuessingGame, PalindromeChecker, ParityReporter, RandomTarget},
};
use anyhow::Context;
use std::io::{self, BufRead, Write};
use tracing::{info, instrument};

/// Execute the appropriate command against the process console
pub fn execute_command(config: &Config, command: Option<&Command>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute_command_with(config, command, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a command reading from `input` and printing to `out`
#[instrument(skip(config, input, out))]
pub fn execute_command_with<R: BufRead, W: Write>(
    config: &Config,
    command: Option<&Command>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        None | Some(Command::Demo) => execute_demo_command(config, input, out),
        Some(Command::Parity { number }) => ParityReporter::new()
            .report(*number, out)
            .context("Failed to report parity"),
        Some(Command::Guess { .. }) => execute_guess_command(config, input, out),
        Some(Command::Palindrome { text }) => PalindromeChecker::new()
            .check(text, out)
            .context("Failed to check palindrome"),
        Some(Command::Save {
            username, password, ..
        }) => CredentialStore::new()
            .save(&config.credential_file, username, password)
            .context("Failed to save credentials"),
        Some(Command::Load { new_password, .. }) => {
            CredentialStore::new()
                .load(&config.credential_file, new_password.as_deref(), out)
                .context("Failed to load credentials")?;
            Ok(())
        }
    }
}

/// Execute the guessing game command
#[instrument(skip_all)]
fn execute_guess_command<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut game = GuessingGame::new(config.guessing.clone(), RandomTarget::thread_local());
    let guesses = game
        .play(input, out)
        .context("Guessing game ended abnormally")?;
    info!("Guessing game finished after {} guess(es)", guesses);
    Ok(())
}

/// Run every exercise in the fixed demonstration order
#[instrument(skip_all)]
fn execute_demo_command<R: BufRead, W: Write>(
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    info!("Running workshop demonstration");

    let parity = ParityReporter::new();
    parity.report(3, out).context("Failed to report parity")?;
    parity.report(4, out).context("Failed to report parity")?;

    execute_guess_command(config, input, out)?;

    let palindrome = PalindromeChecker::new();
    palindrome
        .check("ratrace", out)
        .context("Failed to check palindrome")?;
    palindrome
        .check("racecar", out)
        .context("Failed to check palindrome")?;

    let store = CredentialStore::new();
    let path = &config.credential_file;
    store
        .save(path, "naitian", "p4ssw0rd")
        .context("Failed to save credentials")?;
    store
        .load(path, None, out)
        .context("Failed to load credentials")?;
    store
        .load(path, Some("p4ssw0rd!"), out)
        .context("Failed to update credentials")?;
    store
        .load(path, None, out)
        .context("Failed to load credentials")?;

    info!("Demonstration completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::guessing::PROMPT;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run(config: &Config, command: Option<&Command>, script: &str) -> anyhow::Result<String> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        execute_command_with(config, command, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_demo_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            credential_file: temp_dir.path().join("secret.txt"),
            ..Config::default()
        };

        let out = run(&config, None, "exit\n").unwrap();

        let expected = format!(
            "odd\neven\n{PROMPT}False\nTrue\nnaitian\np4ssw0rd\nnaitian\np4ssw0rd!\nnaitian\np4ssw0rd!\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_save_and_load_commands_use_configured_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            credential_file: temp_dir.path().join("creds.txt"),
            ..Config::default()
        };
        let save = Command::Save {
            file: config.credential_file.clone(),
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        let load = Command::Load {
            file: config.credential_file.clone(),
            new_password: None,
        };

        assert_eq!(run(&config, Some(&save), "").unwrap(), "");
        assert_eq!(run(&config, Some(&load), "").unwrap(), "user\npass\n");
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            credential_file: temp_dir.path().join("absent.txt"),
            ..Config::default()
        };
        let load = Command::Load {
            file: config.credential_file.clone(),
            new_password: Some("new".to_string()),
        };

        let err = run(&config, Some(&load), "").unwrap_err();
        assert!(err.to_string().contains("Failed to load credentials"));
    }

    #[test]
    fn test_guess_with_bad_input_is_an_error() {
        let config = Config::default();
        let guess = Command::Guess { min: 1, max: 9 };
        assert!(run(&config, Some(&guess), "seven\n").is_err());
    }
}
