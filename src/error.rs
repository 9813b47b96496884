use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a tokenizer run. Unrecognized characters are not errors, they are
/// simply dropped by the mapper.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("unable to read {}: {source}", path.display())]
    Input { path: PathBuf, source: io::Error },

    #[error("unable to write {}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },

    #[error("tensor operation failed: {0}")]
    Tensor(#[from] candle_core::Error),
}

impl TokenError {
    pub fn input(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TokenError::Input { path: path.into(), source }
    }

    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TokenError::Output { path: path.into(), source }
    }
}
