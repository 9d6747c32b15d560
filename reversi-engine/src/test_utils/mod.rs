//! Utilities used for testing.

pub mod perft;
pub use perft::run_perft;
