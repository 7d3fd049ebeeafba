//! Common utilities module
//!
//! This module contains shared utilities used across the image pipeline.

pub mod error;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use error::{BmpError, Result};
