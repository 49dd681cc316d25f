//! Two-line encoded credential file
//!
//! Line 1 holds the encoded username and line 2 the encoded password.
//! Every save replaces the whole file.

use crate::{
    error::{Result, WorkshopError},
    utils::{FileSystemUtils, encoding},
};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Reads and writes the credential file
#[derive(Debug, Default)]
pub struct CredentialStore {
    fs_utils: FileSystemUtils,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Encode both values and write them as the two lines of `path`.
    ///
    /// Values must not contain newlines. There is no trailing separator.
    #[instrument(skip(self, username, password))]
    pub fn save<P: AsRef<Path> + std::fmt::Debug>(
        &self,
        path: P,
        username: &str,
        password: &str,
    ) -> Result<()> {
        let path = path.as_ref();
        let contents = format!(
            "{}\n{}",
            encoding::encode_text(username),
            encoding::encode_text(password)
        );

        self.fs_utils.write_file(path, contents)?;
        info!("Saved credentials to {}", path.display());
        Ok(())
    }

    /// Decode the credential file and print its values.
    ///
    /// Without `new_password` every line is decoded and printed in file
    /// order. With `new_password` only line 1 is decoded; the username and
    /// the literal new password are printed and the file is rewritten with
    /// that pair. Returns the printed values.
    #[instrument(skip(self, new_password, out))]
    pub fn load<P: AsRef<Path> + std::fmt::Debug, W: Write>(
        &self,
        path: P,
        new_password: Option<&str>,
        out: &mut W,
    ) -> Result<Vec<String>> {
        let path = path.as_ref();
        let contents = self.fs_utils.read_file_to_string(path)?;
        let lines: Vec<&str> = contents.lines().collect();
        debug!("Credential file has {} line(s)", lines.len());

        let printed = match new_password {
            None => {
                let mut printed = Vec::with_capacity(lines.len());
                for (i, line) in lines.iter().enumerate() {
                    let value = decode_line(path, i + 1, line)?;
                    print_value(out, &value)?;
                    printed.push(value);
                }
                printed
            }
            Some(password) => {
                let first = lines
                    .first()
                    .ok_or_else(|| WorkshopError::missing_line(path, 1))?;
                let username = decode_line(path, 1, first)?;
                print_value(out, &username)?;
                print_value(out, password)?;

                info!("Replacing password in {}", path.display());
                self.save(path, &username, password)?;
                vec![username, password.to_string()]
            }
        };

        Ok(printed)
    }
}

fn print_value<W: Write>(out: &mut W, value: &str) -> Result<()> {
    writeln!(out, "{value}").map_err(|e| WorkshopError::console("write", e))
}

fn decode_line(path: &Path, line: usize, encoded: &str) -> Result<String> {
    let bytes =
        encoding::decode_bytes(encoded).map_err(|e| WorkshopError::decode(path, line, e))?;
    String::from_utf8(bytes).map_err(|e| WorkshopError::utf8(path, line, e))
}
