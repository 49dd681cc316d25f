//! Interactive number guessing loop
//!
//! A target is drawn from an inclusive range and every guess is compared
//! against it. A fresh target is drawn after every guess, right or wrong,
//! so the loop only ends when the sentinel line is read.

use crate::{
    config::GuessingConfig,
    error::{Result, WorkshopError},
};
use rand::Rng;
use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument};

/// Prompt written before every read
pub const PROMPT: &str = "What's your guess? ";

/// Source of game targets
pub trait TargetSource {
    /// Draw a target from `range`
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64;
}

/// Draws targets uniformly with `rand`
#[derive(Debug)]
pub struct RandomTarget<R: Rng> {
    rng: R,
}

impl RandomTarget<rand::rngs::ThreadRng> {
    /// Source backed by the thread-local generator
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomTarget<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetSource for RandomTarget<R> {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }
}

/// Outcome of comparing one guess with the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    TooLow,
    TooHigh,
    Exactly,
}

impl Verdict {
    pub fn judge(guess: i64, target: i64) -> Self {
        match guess.cmp(&target) {
            Ordering::Less => Self::TooLow,
            Ordering::Greater => Self::TooHigh,
            Ordering::Equal => Self::Exactly,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TooLow => "Too low",
            Self::TooHigh => "Too high",
            Self::Exactly => "Exactly",
        }
    }
}

/// The guessing game
pub struct GuessingGame<T: TargetSource> {
    config: GuessingConfig,
    targets: T,
}

impl<T: TargetSource> GuessingGame<T> {
    pub fn new(config: GuessingConfig, targets: T) -> Self {
        Self { config, targets }
    }

    /// Run until the sentinel line is read.
    ///
    /// Returns the number of guesses judged. A non-numeric line is a
    /// fatal parse error and input ending early is `EndOfInput`. Integers
    /// too large for `i64` are judged too high, or too low if negative.
    #[instrument(skip_all, fields(min = self.config.min, max = self.config.max))]
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<u64> {
        let mut target = self.draw_target();
        let mut guesses = 0u64;

        loop {
            write!(out, "{PROMPT}")
                .and_then(|()| out.flush())
                .map_err(|e| WorkshopError::console("write", e))?;

            let mut line = String::new();
            let read = input
                .read_line(&mut line)
                .map_err(|e| WorkshopError::console("read", e))?;
            if read == 0 {
                return Err(WorkshopError::EndOfInput);
            }

            let entry = line.trim_end_matches(['\n', '\r']);
            if entry == self.config.sentinel {
                info!("Sentinel read after {} guess(es)", guesses);
                return Ok(guesses);
            }

            // Integers beyond i64 are still judged, by sign alone
            let verdict = match entry.trim().parse::<i64>() {
                Ok(guess) => Verdict::judge(guess, target),
                Err(e) => match e.kind() {
                    IntErrorKind::PosOverflow => Verdict::TooHigh,
                    IntErrorKind::NegOverflow => Verdict::TooLow,
                    _ => return Err(WorkshopError::parse(entry, e)),
                },
            };
            debug!("Guess {} against target {}: {:?}", entry.trim(), target, verdict);
            writeln!(out, "{}", verdict.as_str()).map_err(|e| WorkshopError::console("write", e))?;

            guesses += 1;
            target = self.draw_target();
        }
    }

    fn draw_target(&mut self) -> i64 {
        self.targets.draw(self.config.min..=self.config.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::VecDeque;
    use std::io::Cursor;

    /// Hands out scripted targets and counts how many were drawn
    struct Scripted {
        targets: VecDeque<i64>,
        draws: usize,
    }

    impl Scripted {
        fn new(targets: &[i64]) -> Self {
            Self {
                targets: targets.iter().copied().collect(),
                draws: 0,
            }
        }
    }

    impl TargetSource for Scripted {
        fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
            assert_eq!(range, 1..=9);
            self.draws += 1;
            self.targets.pop_front().unwrap_or(5)
        }
    }

    impl TargetSource for &mut Scripted {
        fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
            (**self).draw(range)
        }
    }

    fn run(script: &str, targets: &mut Scripted) -> (Result<u64>, String) {
        let mut game = GuessingGame::new(GuessingConfig::default(), targets);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = game.play(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exact_guess_then_exit() {
        let mut targets = Scripted::new(&[5]);
        let (result, out) = run("5\nexit\n", &mut targets);

        assert_eq!(result.unwrap(), 1);
        assert_eq!(out, format!("{PROMPT}Exactly\n{PROMPT}"));
    }

    #[test]
    fn test_redraws_after_every_guess() {
        let mut targets = Scripted::new(&[5, 9, 2]);
        let (result, out) = run("5\n5\n5\nexit\n", &mut targets);

        assert_eq!(result.unwrap(), 3);
        let verdicts: Vec<&str> = out
            .split(PROMPT)
            .filter(|s| !s.is_empty())
            .map(str::trim_end)
            .collect();
        assert_eq!(verdicts, vec!["Exactly", "Too low", "Too high"]);
        // initial draw plus one per guess, even after the correct one
        assert_eq!(targets.draws, 4);
    }

    #[test]
    fn test_exit_first() {
        let mut targets = Scripted::new(&[]);
        let (result, out) = run("exit\n", &mut targets);
        assert_eq!(result.unwrap(), 0);
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_sentinel_is_exact_and_case_sensitive() {
        let mut targets = Scripted::new(&[]);
        let (result, _) = run("EXIT\n", &mut targets);
        assert!(matches!(result, Err(WorkshopError::Parse { ref input, .. }) if input == "EXIT"));

        let mut targets = Scripted::new(&[]);
        let (result, _) = run("exit \n", &mut targets);
        assert!(matches!(result, Err(WorkshopError::Parse { .. })));
    }

    #[test]
    fn test_sentinel_without_newline_and_crlf() {
        let mut targets = Scripted::new(&[]);
        assert_eq!(run("exit", &mut targets).0.unwrap(), 0);

        let mut targets = Scripted::new(&[7]);
        let (result, out) = run("3\r\nexit\r\n", &mut targets);
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("Too low"));
    }

    #[test]
    fn test_whitespace_around_number_is_accepted() {
        let mut targets = Scripted::new(&[4]);
        let (result, out) = run("  4 \nexit\n", &mut targets);
        assert_eq!(result.unwrap(), 1);
        assert!(out.contains("Exactly"));
    }

    #[test]
    fn test_non_numeric_input_is_fatal() {
        let mut targets = Scripted::new(&[5]);
        let (result, out) = run("five\nexit\n", &mut targets);
        assert!(matches!(result, Err(WorkshopError::Parse { ref input, .. }) if input == "five"));
        assert_eq!(out, PROMPT);
    }

    #[test]
    fn test_out_of_range_integers_are_judged_by_sign() {
        let mut targets = Scripted::new(&[5, 5]);
        let (result, out) = run(
            "99999999999999999999\n-99999999999999999999\nexit\n",
            &mut targets,
        );

        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, format!("{PROMPT}Too high\n{PROMPT}Too low\n{PROMPT}"));
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let mut targets = Scripted::new(&[5]);
        let (result, _) = run("1\n", &mut targets);
        assert!(matches!(result, Err(WorkshopError::EndOfInput)));
    }

    #[test]
    fn test_random_targets_stay_in_range() {
        let mut source = RandomTarget::new(StdRng::seed_from_u64(7));
        for _ in 0..1000 {
            let target = source.draw(1..=9);
            assert!((1..=9).contains(&target));
        }
    }

    #[test]
    fn test_judge() {
        assert_eq!(Verdict::judge(1, 9), Verdict::TooLow);
        assert_eq!(Verdict::judge(9, 1), Verdict::TooHigh);
        assert_eq!(Verdict::judge(-4, -4), Verdict::Exactly);
    }
}
