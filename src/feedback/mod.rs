pub mod filter;

use crate::code::Code;
use crate::error::{MastermindError, Result};
use itertools::Itertools;
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    // Number of guess symbols that sit at the same index in the reference.
    pub correct_positions: usize,

    // Number of further guess symbols present in the reference but at another index.
    pub correct_symbols: usize,
}

impl Feedback {
    pub fn new(correct_positions: usize, correct_symbols: usize) -> Self {
        Self {
            correct_positions,
            correct_symbols,
        }
    }

    pub fn total(&self) -> usize {
        self.correct_positions + self.correct_symbols
    }

    pub fn is_solved(&self, length: usize) -> bool {
        self.correct_positions == length && self.correct_symbols == 0
    }

    /// Every feedback pair whose components add up to at most `length`, sorted ascending.
    ///
    /// Some of these cannot actually be produced (e.g. `length - 1` exact and one misplaced), but
    /// none outside this set can.
    pub fn possible_for_length(length: usize) -> Vec<Feedback> {
        #[derive(Clone, Copy, Eq, PartialEq)]
        enum Peg {
            Exact,
            Misplaced,
            Absent,
        }
        let mut outcomes: Vec<Feedback> = vec![Peg::Exact, Peg::Misplaced, Peg::Absent]
            .into_iter()
            .combinations_with_replacement(length)
            .map(|pegs| Feedback {
                correct_positions: pegs.iter().filter(|peg| **peg == Peg::Exact).count(),
                correct_symbols: pegs.iter().filter(|peg| **peg == Peg::Misplaced).count(),
            })
            .collect();
        outcomes.sort();
        outcomes
    }
}

impl Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.total() == 0 {
            write!(f, "-")
        } else {
            write!(
                f,
                "{}{}",
                "x".repeat(self.correct_positions),
                "o".repeat(self.correct_symbols)
            )
        }
    }
}

impl FromStr for Feedback {
    type Err = MastermindError;

    // Accepts the Display form: one `x` per exact match and one `o` per misplaced symbol, in any
    // order. `-` (or nothing) means no matches at all.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed == "-" {
            return Ok(Feedback::default());
        }
        let mut feedback = Feedback::default();
        for c in trimmed.chars() {
            match c {
                'x' | 'X' => feedback.correct_positions += 1,
                'o' | 'O' => feedback.correct_symbols += 1,
                other => {
                    return Err(MastermindError::InvalidFeedback {
                        input: s.to_string(),
                        reason: format!("unexpected peg '{}'", other),
                    })
                }
            }
        }
        Ok(feedback)
    }
}

fn check_lengths<T>(reference: &Code<T>, candidate: &Code<T>) -> Result<()> {
    if reference.len() != candidate.len() {
        return Err(MastermindError::InvalidLength {
            expected: reference.len(),
            actual: candidate.len(),
        });
    }
    Ok(())
}

/// The symbols that occupy the same index in both codes, in index order.
pub fn positions_matched<T: Clone + Eq>(
    reference: &Code<T>,
    candidate: &Code<T>,
) -> Result<Vec<T>> {
    check_lengths(reference, candidate)?;
    Ok(reference
        .iter()
        .zip(candidate.iter())
        .filter(|(a, b)| a == b)
        .map(|(a, _)| a.clone())
        .collect())
}

/// Multiset intersection size: for every distinct value, the smaller of its two occurrence counts.
pub fn total_symbol_overlap<T: Hash + Eq>(reference: &[T], candidate: &[T]) -> usize {
    let remaining = reference.iter().counts();
    candidate
        .iter()
        .counts()
        .into_iter()
        .map(|(symbol, count)| remaining.get(symbol).map_or(0, |left| count.min(*left)))
        .sum()
}

pub fn evaluate<T: Clone + Hash + Eq>(
    reference: &Code<T>,
    candidate: &Code<T>,
) -> Result<Feedback> {
    let correct_positions = positions_matched(reference, candidate)?.len();
    // Every positional match is also a multiset match, so this never underflows.
    let overlap = total_symbol_overlap(reference.symbols(), candidate.symbols());
    Ok(Feedback {
        correct_positions,
        correct_symbols: overlap - correct_positions,
    })
}
