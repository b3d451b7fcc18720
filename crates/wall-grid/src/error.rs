//! This module defines the error types used by the `wall-grid` crate.

#![warn(missing_docs)]

/// Error type for grid construction.
///
/// Pointer input that lands outside the grid is never an error; it is
/// silently dropped by [`WallGrid`](crate::map::WallGrid). Only an invalid
/// geometry can be reported.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Error for invalid grid dimensions.
    /// This variant is returned when the cell count or cell size is not positive,
    /// or when the resulting canvas extent does not fit in display coordinates.
    InvalidDimensions(&'static str),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidDimensions(msg) => write!(f, "Invalid grid dimensions: {}", msg),
        }
    }
}

impl core::error::Error for GridError {}
