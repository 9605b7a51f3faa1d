pub mod config;
pub mod error;
pub mod smoothing;

pub use config::WindowSize;
pub use error::{Result, SmaError};
pub use smoothing::{SimpleMovingAverage, Smoother};
