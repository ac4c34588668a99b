//! Utility modules: data directory, logging.

pub mod logging;
pub mod persistence;
