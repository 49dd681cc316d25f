//! Core exercises
//!
//! Four independent utilities: parity reporting, the guessing game,
//! the palindrome check and the encoded credential file.

pub mod credentials;
pub mod guessing;
pub mod palindrome;
pub mod parity;

pub use credentials::CredentialStore;
pub use guessing::{GuessingGame, RandomTarget, TargetSource};
pub use palindrome::PalindromeChecker;
pub use parity::ParityReporter;
