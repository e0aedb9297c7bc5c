//! CSV input and output for the command-line forecaster.

pub mod export;
pub mod series;
