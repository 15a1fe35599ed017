// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unsupported data interval: {0}")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, Error>;
