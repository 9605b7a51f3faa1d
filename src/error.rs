use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmaError {
    #[error("window size must be at least 1 (got {got})")]
    InvalidWindow { got: usize },

    #[error("could not allocate {bytes} bytes of sample storage")]
    StorageExhausted {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("bad sample value: {0}")]
    BadSample(String),
}

pub type Result<T> = std::result::Result<T, SmaError>;
