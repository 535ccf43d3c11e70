//! Trainable network state in flat, serializable form.

use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;

/// Full trainable state of a [`MoodNetwork`](super::MoodNetwork).
///
/// Weight matrices are flattened row-major; the embedded config records the
/// shapes they must match on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkParameters {
    /// Input→hidden weights, `[hidden_size, input_size]` row-major
    pub weights1: Vec<f32>,
    /// Hidden→output weights, `[output_size, hidden_size]` row-major
    pub weights2: Vec<f32>,
    pub bias1: Vec<f32>,
    pub bias2: Vec<f32>,
    pub config: NetworkConfig,
}
