//! Mood records and the fixed 10-class emotion vocabulary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 10 fixed emotion classes used by the network encoder.
///
/// The discriminants double as output-layer indices, so the ordering here is
/// part of the model snapshot contract and must never be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Emotion {
    Happy = 0,
    Calm = 1,
    Energetic = 2,
    Grateful = 3,
    Motivated = 4,
    Sad = 5,
    Anxious = 6,
    Stressed = 7,
    Tired = 8,
    Frustrated = 9,
}

impl Emotion {
    /// Get emotion class from index (0-9)
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Emotion::Happy),
            1 => Some(Emotion::Calm),
            2 => Some(Emotion::Energetic),
            3 => Some(Emotion::Grateful),
            4 => Some(Emotion::Motivated),
            5 => Some(Emotion::Sad),
            6 => Some(Emotion::Anxious),
            7 => Some(Emotion::Stressed),
            8 => Some(Emotion::Tired),
            9 => Some(Emotion::Frustrated),
            _ => None,
        }
    }

    /// Parse a label string. Unrecognized labels alias to `Happy` (class 0),
    /// a lossy best-effort policy kept for wire-contract parity.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "happy" => Emotion::Happy,
            "calm" => Emotion::Calm,
            "energetic" => Emotion::Energetic,
            "grateful" => Emotion::Grateful,
            "motivated" => Emotion::Motivated,
            "sad" => Emotion::Sad,
            "anxious" => Emotion::Anxious,
            "stressed" => Emotion::Stressed,
            "tired" => Emotion::Tired,
            "frustrated" => Emotion::Frustrated,
            _ => Emotion::Happy,
        }
    }

    /// Canonical lowercase label for this emotion.
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Calm => "calm",
            Emotion::Energetic => "energetic",
            Emotion::Grateful => "grateful",
            Emotion::Motivated => "motivated",
            Emotion::Sad => "sad",
            Emotion::Anxious => "anxious",
            Emotion::Stressed => "stressed",
            Emotion::Tired => "tired",
            Emotion::Frustrated => "frustrated",
        }
    }

    /// Whether this emotion is generally positive.
    pub fn is_positive(&self) -> bool {
        (*self as usize) < 5
    }

    /// Total number of emotion classes
    pub fn num_classes() -> usize {
        10
    }

    /// Get all emotion classes in encoder order
    pub fn all() -> [Emotion; 10] {
        [
            Emotion::Happy,
            Emotion::Calm,
            Emotion::Energetic,
            Emotion::Grateful,
            Emotion::Motivated,
            Emotion::Sad,
            Emotion::Anxious,
            Emotion::Stressed,
            Emotion::Tired,
            Emotion::Frustrated,
        ]
    }
}

/// One logged emotional state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub emotion: Emotion,
    /// Intensity on a 1-10 scale
    pub intensity: u8,
    pub timestamp: DateTime<Utc>,
}

impl MoodRecord {
    /// Create a record, clamping intensity into the 1-10 range.
    pub fn new(emotion: Emotion, intensity: u8, timestamp: DateTime<Utc>) -> Self {
        Self {
            emotion,
            intensity: intensity.clamp(1, 10),
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_index_round_trip() {
        for (idx, emotion) in Emotion::all().iter().enumerate() {
            assert_eq!(Emotion::from_index(idx), Some(*emotion));
            assert_eq!(*emotion as usize, idx);
        }
        assert_eq!(Emotion::from_index(10), None);
    }

    #[test]
    fn test_from_label_known() {
        assert_eq!(Emotion::from_label("anxious"), Emotion::Anxious);
        assert_eq!(Emotion::from_label("  Tired "), Emotion::Tired);
    }

    #[test]
    fn test_from_label_unknown_aliases_to_happy() {
        assert_eq!(Emotion::from_label("euphoric"), Emotion::Happy);
        assert_eq!(Emotion::from_label(""), Emotion::Happy);
    }

    #[test]
    fn test_positivity_split() {
        assert!(Emotion::Grateful.is_positive());
        assert!(!Emotion::Stressed.is_positive());
        let positives = Emotion::all().iter().filter(|e| e.is_positive()).count();
        assert_eq!(positives, 5);
    }

    #[test]
    fn test_record_clamps_intensity() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(MoodRecord::new(Emotion::Calm, 0, at).intensity, 1);
        assert_eq!(MoodRecord::new(Emotion::Calm, 15, at).intensity, 10);
    }
}
