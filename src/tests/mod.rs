//! ionex-formatter lib test modules
pub mod toolkit;
