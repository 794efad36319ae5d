use crate::error::{MastermindError, Result};
use crate::feedback::{evaluate, Feedback};
use crate::Symbol;
use std::fmt;
use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

/// A fixed-length, ordered sequence of symbols. Used for secrets, guesses and every member of a
/// candidate universe.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Code<T = Symbol> {
    in_order: Vec<T>,
}

impl<T> Code<T> {
    pub fn new(symbols: Vec<T>) -> Self {
        Self { in_order: symbols }
    }

    pub fn len(&self) -> usize {
        self.in_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.in_order.is_empty()
    }

    pub fn symbols(&self) -> &[T] {
        &self.in_order
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.in_order.iter()
    }

    pub fn into_symbols(self) -> Vec<T> {
        self.in_order
    }
}

impl<T: Clone + Hash + Eq> Code<T> {
    /// Scores `guess` as if `self` were the secret.
    pub fn compare(&self, guess: &Code<T>) -> Result<Feedback> {
        evaluate(self, guess)
    }
}

impl<T> From<Vec<T>> for Code<T> {
    fn from(symbols: Vec<T>) -> Self {
        Self::new(symbols)
    }
}

impl From<&str> for Code<Symbol> {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}

impl FromStr for Code<Symbol> {
    type Err = MastermindError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MastermindError::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self::from(trimmed))
    }
}

impl<T: Display> Display for Code<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.in_order {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Code<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order.iter()
    }
}
