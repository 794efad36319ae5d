//! Feedback scoring and candidate narrowing for Mastermind-style code breaking.
//!
//! ```
//! use mastermind::{enumerate_universe, filter_candidates, generate_symbols, Code, Feedback};
//!
//! let alphabet = generate_symbols(3)?;
//! let universe = enumerate_universe(&alphabet, 3)?;
//! let remaining = filter_candidates(Feedback::new(0, 3), &Code::from("abc"), &universe)?;
//! assert_eq!(remaining, vec![Code::from("bca"), Code::from("cab")]);
//! # Ok::<(), mastermind::MastermindError>(())
//! ```

mod alphabet;
mod code;
mod config;
mod error;
mod feedback;

pub type Symbol = char;

pub use alphabet::{enumerate_universe, generate_symbols, SymbolPool};
pub use code::Code;
pub use config::GameConfig;
pub use error::{MastermindError, Result};
#[cfg(feature = "parallel")]
pub use feedback::filter::par_filter_candidates;
pub use feedback::filter::{filter_by_observations, filter_candidates, is_consistent, Observation};
pub use feedback::{evaluate, positions_matched, total_symbol_overlap, Feedback};
