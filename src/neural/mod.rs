//! Numeric network core.
//!
//! A small two-layer feed-forward network (input → hidden → output) with a
//! manual forward pass and backpropagation. This is the only component in the
//! crate that does real numerical training work.

pub mod network;
pub mod params;

pub use network::{MoodNetwork, TrainingHistory};
pub use params::NetworkParameters;
