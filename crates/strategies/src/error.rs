// In crates/strategies/src/error.rs

use core_types::Symbol;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Indicator {indicator} failed: {reason}")]
    Indicator { indicator: &'static str, reason: String },

    #[error("Invalid bar at index {index}: {reason}")]
    InvalidBar { index: usize, reason: String },

    #[error("Cannot compute {0} over an empty series")]
    EmptySeries(&'static str),

    #[error("Invalid strategy parameters: {0}")]
    InvalidParameters(String),

    #[error("Failed to parse strategy params: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Attempted to create unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("{symbol}: {source}")]
    Symbol {
        symbol: Symbol,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attaches the ticker being evaluated to an indicator or data error.
    pub fn for_symbol(self, symbol: &Symbol) -> Self {
        Error::Symbol {
            symbol: symbol.clone(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
