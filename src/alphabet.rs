use crate::code::Code;
use crate::error::{MastermindError, Result};
use crate::Symbol;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;

const LATIN: &str = "abcdefgh";
const FULL_LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

/// The ordered pool symbols are drawn from. Alphabets are always a prefix of it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    pub fn new<I: IntoIterator<Item = Symbol>>(symbols: I) -> Result<Self> {
        let symbols: Vec<Symbol> = symbols.into_iter().collect();
        let mut seen = HashSet::new();
        if let Some(duplicate) = symbols.iter().find(|symbol| !seen.insert(**symbol)) {
            return Err(MastermindError::DuplicateSymbol(*duplicate));
        }
        Ok(Self { symbols })
    }

    /// `a` through `h`.
    pub fn latin() -> Self {
        Self {
            symbols: LATIN.chars().collect(),
        }
    }

    /// `a` through `z`.
    pub fn full_latin() -> Self {
        Self {
            symbols: FULL_LATIN.chars().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.symbols.len()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn generate_symbols(&self, size: usize) -> Result<Vec<Symbol>> {
        if size > self.capacity() {
            return Err(MastermindError::OutOfRange {
                requested: size,
                available: self.capacity(),
            });
        }
        Ok(self.symbols[..size].to_vec())
    }
}

impl Default for SymbolPool {
    fn default() -> Self {
        Self::latin()
    }
}

impl TryFrom<String> for SymbolPool {
    type Error = MastermindError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s.chars())
    }
}

impl From<SymbolPool> for String {
    fn from(pool: SymbolPool) -> Self {
        pool.symbols.into_iter().collect()
    }
}

impl fmt::Display for SymbolPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.iter().collect::<String>())
    }
}

/// The first `size` symbols of the `a`..`h` pool.
pub fn generate_symbols(size: usize) -> Result<Vec<Symbol>> {
    SymbolPool::latin().generate_symbols(size)
}

/// All codes of `length` over `alphabet`, in lexicographic product order.
pub fn enumerate_universe<T: Clone>(alphabet: &[T], length: usize) -> Result<Vec<Code<T>>> {
    if length == 0 {
        return Err(MastermindError::InvalidLength {
            expected: 1,
            actual: 0,
        });
    }
    Ok(itertools::repeat_n(alphabet.iter().cloned(), length)
        .multi_cartesian_product()
        .map(Code::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_symbols() {
        assert!(generate_symbols(0).unwrap().is_empty());
    }

    #[test]
    fn minimal_symbols() {
        assert_eq!(generate_symbols(3).unwrap(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn max_symbols() {
        assert_eq!(
            generate_symbols(8).unwrap(),
            vec!['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h']
        );
    }

    fn assert_prefix_growth(pool: &SymbolPool) {
        let mut previous: Vec<Symbol> = Vec::new();
        for n in 0..=pool.capacity() {
            let symbols = pool.generate_symbols(n).unwrap();
            assert_eq!(symbols.len(), n);
            assert_eq!(symbols.iter().collect::<HashSet<_>>().len(), n);
            assert!(symbols.starts_with(&previous));
            previous = symbols;
        }
    }

    #[test]
    fn every_size_is_unique_and_extends_the_last() {
        assert_prefix_growth(&SymbolPool::latin());
        assert_prefix_growth(&SymbolPool::full_latin());
        assert_eq!(SymbolPool::full_latin().capacity(), 26);
    }

    #[test]
    fn free_function_uses_latin_pool() {
        for n in 0..=8 {
            assert_eq!(
                generate_symbols(n).unwrap(),
                SymbolPool::latin().generate_symbols(n).unwrap()
            );
        }
    }

    #[test]
    fn too_many_symbols() {
        let err = generate_symbols(9).unwrap_err();
        assert!(matches!(
            err,
            MastermindError::OutOfRange {
                requested: 9,
                available: 8
            }
        ));
    }

    #[test]
    fn larger_pool_extends_range() {
        let symbols = SymbolPool::full_latin().generate_symbols(10).unwrap();
        assert_eq!(symbols.len(), 10);
        assert_eq!(symbols[9], 'j');
    }

    #[test]
    fn custom_pool_keeps_its_order() {
        let pool = SymbolPool::new("rgby".chars()).unwrap();
        assert_eq!(pool.generate_symbols(2).unwrap(), vec!['r', 'g']);
        assert_eq!(pool.to_string(), "rgby");
    }

    #[test]
    fn duplicate_symbols_rejected() {
        let err = SymbolPool::new("abca".chars()).unwrap_err();
        assert!(matches!(err, MastermindError::DuplicateSymbol('a')));
    }

    #[test]
    fn empty_pool_only_serves_nothing() {
        let pool = SymbolPool::new(Vec::new()).unwrap();
        assert!(pool.generate_symbols(0).unwrap().is_empty());
        assert!(pool.generate_symbols(1).is_err());
    }

    #[test]
    fn universe_is_in_product_order() {
        let universe = enumerate_universe(&['a', 'b'], 2).unwrap();
        assert_eq!(
            universe,
            vec![
                Code::from("aa"),
                Code::from("ab"),
                Code::from("ba"),
                Code::from("bb"),
            ]
        );
    }

    #[test]
    fn universe_size_is_alphabet_to_the_length() {
        let alphabet = generate_symbols(3).unwrap();
        assert_eq!(enumerate_universe(&alphabet, 3).unwrap().len(), 27);
    }

    #[test]
    fn empty_alphabet_gives_empty_universe() {
        let alphabet: Vec<Symbol> = Vec::new();
        assert!(enumerate_universe(&alphabet, 3).unwrap().is_empty());
    }

    #[test]
    fn zero_length_universe_rejected() {
        assert!(enumerate_universe(&['a'], 0).is_err());
    }
}
