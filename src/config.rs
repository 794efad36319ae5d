use crate::alphabet::{enumerate_universe, SymbolPool};
use crate::code::Code;
use crate::error::{MastermindError, Result};
use crate::Symbol;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

fn default_code_length() -> usize {
    4
}

fn default_alphabet_size() -> usize {
    6
}

/// Shape of a game: how long codes are and which symbols they use.
///
/// ```toml
/// code_length = 4
/// alphabet_size = 6
/// pool = "abcdefgh"
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    #[serde(default = "default_alphabet_size")]
    pub alphabet_size: usize,

    #[serde(default)]
    pub pool: SymbolPool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            alphabet_size: default_alphabet_size(),
            pool: SymbolPool::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            code_length = config.code_length,
            alphabet_size = config.alphabet_size,
            "loaded game configuration"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            return Err(MastermindError::Config {
                message: "code_length must be at least 1".to_string(),
            });
        }
        if self.alphabet_size > self.pool.capacity() {
            return Err(MastermindError::Config {
                message: format!(
                    "alphabet_size {} exceeds the {} symbols in pool \"{}\"",
                    self.alphabet_size,
                    self.pool.capacity(),
                    self.pool
                ),
            });
        }
        if self.alphabet_size == 0 {
            warn!("alphabet_size is 0, the candidate universe will be empty");
        }
        Ok(())
    }

    pub fn alphabet(&self) -> Result<Vec<Symbol>> {
        self.pool.generate_symbols(self.alphabet_size)
    }

    pub fn universe(&self) -> Result<Vec<Code>> {
        enumerate_universe(&self.alphabet()?, self.code_length)
    }
}
