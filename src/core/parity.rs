//! Even/odd classification

use crate::error::{Result, WorkshopError};
use std::io::Write;
use tracing::{debug, instrument};

/// Parity of an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Classify an integer
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 { Self::Even } else { Self::Odd }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

/// Prints whether a number is even or odd
#[derive(Debug, Default)]
pub struct ParityReporter;

impl ParityReporter {
    pub fn new() -> Self {
        Self
    }

    /// Write "even" or "odd" for `n` as one line
    #[instrument(skip(self, out))]
    pub fn report<W: Write>(&self, n: i64, out: &mut W) -> Result<()> {
        let parity = Parity::of(n);
        debug!("{} is {:?}", n, parity);
        writeln!(out, "{}", parity.as_str()).map_err(|e| WorkshopError::console("write", e))
    }
}
