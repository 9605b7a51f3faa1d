//! Configuration for the moving-average harness.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SmaError};

/// Validated moving-average window size
///
/// A window must hold at least one sample; this newtype makes a zero
/// window unrepresentable past the parsing boundary, so the averager
/// itself never sees one from the CLI.
///
/// # Example
/// ```
/// use movingmean::config::WindowSize;
///
/// let window: WindowSize = "10".parse().unwrap();
/// assert_eq!(window.get(), 10);
/// assert!("0".parse::<WindowSize>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize(usize);

impl WindowSize {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SmaError::InvalidWindow { got: size });
        }
        Ok(Self(size))
    }

    /// Get the window size in samples
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        // Ten samples smooths A/D jitter well without masking real trends.
        Self(10)
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WindowSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let size: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid window size: {}", s))?;
        Self::new(size).map_err(|e| e.to_string())
    }
}
