//! Palindrome check by paired index scan

use crate::error::{Result, WorkshopError};
use std::io::Write;
use tracing::{debug, instrument};

/// Scan character `i` against character `len - 1 - i`, stopping at the
/// first mismatch. The empty string scans no pairs and is a palindrome.
pub fn is_palindrome(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    for i in 0..len {
        if chars[i] != chars[len - 1 - i] {
            debug!("Mismatch at index {}: {:?} != {:?}", i, chars[i], chars[len - 1 - i]);
            return false;
        }
    }
    true
}

/// Prints "True" or "False" for a candidate palindrome
#[derive(Debug, Default)]
pub struct PalindromeChecker;

impl PalindromeChecker {
    pub fn new() -> Self {
        Self
    }

    /// Write "True" if `text` reads the same both ways, "False" otherwise
    #[instrument(skip(self, out))]
    pub fn check<W: Write>(&self, text: &str, out: &mut W) -> Result<()> {
        let verdict = if is_palindrome(text) { "True" } else { "False" };
        writeln!(out, "{verdict}").map_err(|e| WorkshopError::console("write", e))
    }
}
