//! Model export/import snapshot.
//!
//! The engine does not persist anything itself; callers receive a single
//! serializable record and own its storage. Import validates shapes against
//! the live network config before any state is replaced.

use serde::{Deserialize, Serialize};

use crate::data::Emotion;
use crate::error::{EngineError, EngineResult};
use crate::neural::NetworkParameters;
use crate::predictor::ModelState;

/// Everything needed to reconstruct a trained model elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub parameters: NetworkParameters,
    pub state: ModelState,
    /// `(label, class index)` pairs of the emotion encoder
    pub emotion_encoder: Vec<(String, usize)>,
}

impl ModelSnapshot {
    pub fn new(parameters: NetworkParameters, state: ModelState) -> Self {
        Self {
            parameters,
            state,
            emotion_encoder: Emotion::all()
                .iter()
                .map(|e| (e.label().to_string(), *e as usize))
                .collect(),
        }
    }

    /// Check that the embedded encoder still matches the fixed vocabulary.
    pub fn validate_encoder(&self) -> EngineResult<()> {
        if self.emotion_encoder.len() != Emotion::num_classes() {
            return Err(EngineError::shape_mismatch(
                Emotion::num_classes(),
                self.emotion_encoder.len(),
                "emotion encoder",
            ));
        }
        for (label, index) in &self.emotion_encoder {
            let expected = Emotion::from_label(label) as usize;
            if expected != *index {
                return Err(EngineError::invalid_parameter(
                    "emotion_encoder",
                    format!("{}={}", label, index),
                    format!("label '{}' must map to class {}", label, expected),
                ));
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> EngineResult<String> {
        serde_json::to_string(self).map_err(|err| EngineError::Snapshot(err.to_string()))
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|err| EngineError::Snapshot(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;
    use crate::neural::MoodNetwork;

    fn snapshot() -> ModelSnapshot {
        let mut network = MoodNetwork::new(NetworkConfig::default(), 42);
        network.initialize();
        ModelSnapshot::new(network.parameters(), ModelState::default())
    }

    #[test]
    fn test_json_round_trip() {
        let original = snapshot();
        let json = original.to_json().unwrap();
        let restored = ModelSnapshot::from_json(&json).unwrap();
        assert_eq!(restored.parameters.weights1, original.parameters.weights1);
        assert_eq!(restored.emotion_encoder, original.emotion_encoder);
    }

    #[test]
    fn test_encoder_covers_all_classes() {
        let snap = snapshot();
        assert_eq!(snap.emotion_encoder.len(), 10);
        snap.validate_encoder().unwrap();
    }

    #[test]
    fn test_tampered_encoder_rejected() {
        let mut snap = snapshot();
        snap.emotion_encoder[3].1 = 9;
        assert!(snap.validate_encoder().is_err());

        let mut snap = snapshot();
        snap.emotion_encoder.pop();
        assert!(snap.validate_encoder().is_err());
    }

    #[test]
    fn test_bad_json_rejected() {
        assert!(matches!(
            ModelSnapshot::from_json("{not json"),
            Err(EngineError::Snapshot(_))
        ));
    }
}
