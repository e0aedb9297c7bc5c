//! Crop-yield point prediction backed by a pre-fitted regressor artifact.

pub mod linear;
pub mod types;

pub use linear::LinearYieldModel;
pub use types::{CropFeatures, ModelError, YieldModel};
