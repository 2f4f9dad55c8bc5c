//! Ambient engine concerns: errors and logging.

pub mod error;
pub mod logging;

pub use error::Error;
