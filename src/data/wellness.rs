//! Wellness session records and the before/after mood measurement union.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::mood::Emotion;

/// The three supported wellness activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Meditation,
    Yoga,
    Music,
}

impl SessionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Meditation => "meditation",
            SessionKind::Yoga => "yoga",
            SessionKind::Music => "music",
        }
    }
}

/// A mood measurement attached to a session, either a raw 1-10 intensity or a
/// felt emotion label.
///
/// Upstream clients log both shapes; the tagged union replaces the original
/// runtime type inspection with an explicit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MoodMeasure {
    Intensity(u8),
    Felt(Emotion),
}

impl MoodMeasure {
    /// Collapse to a 1-10 intensity. Emotion labels map to a fixed 3/5/7
    /// proxy: negative emotions 3, tired/calm 5, positive 7.
    pub fn as_intensity(&self) -> u8 {
        match self {
            MoodMeasure::Intensity(value) => (*value).clamp(1, 10),
            MoodMeasure::Felt(emotion) => match emotion {
                Emotion::Sad | Emotion::Anxious | Emotion::Stressed | Emotion::Frustrated => 3,
                Emotion::Tired | Emotion::Calm => 5,
                _ => 7,
            },
        }
    }
}

/// One completed wellness activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellnessSessionRecord {
    pub kind: SessionKind,
    pub category: String,
    /// Mood logged before the session, when the user bothered to
    pub mood_before: Option<MoodMeasure>,
    /// Mood logged after the session
    pub mood_after: Option<MoodMeasure>,
    pub completed_at: DateTime<Utc>,
}

impl WellnessSessionRecord {
    /// Intensity improvement across the session, when both measurements exist.
    pub fn improvement(&self) -> Option<f32> {
        match (self.mood_before, self.mood_after) {
            (Some(before), Some(after)) => {
                Some(after.as_intensity() as f32 - before.as_intensity() as f32)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session(before: Option<MoodMeasure>, after: Option<MoodMeasure>) -> WellnessSessionRecord {
        WellnessSessionRecord {
            kind: SessionKind::Meditation,
            category: "mindfulness".to_string(),
            mood_before: before,
            mood_after: after,
            completed_at: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_measure_proxy_values() {
        assert_eq!(MoodMeasure::Felt(Emotion::Anxious).as_intensity(), 3);
        assert_eq!(MoodMeasure::Felt(Emotion::Tired).as_intensity(), 5);
        assert_eq!(MoodMeasure::Felt(Emotion::Happy).as_intensity(), 7);
        assert_eq!(MoodMeasure::Intensity(8).as_intensity(), 8);
        assert_eq!(MoodMeasure::Intensity(0).as_intensity(), 1);
    }

    #[test]
    fn test_improvement_mixed_shapes() {
        let s = session(
            Some(MoodMeasure::Felt(Emotion::Stressed)),
            Some(MoodMeasure::Intensity(8)),
        );
        assert_eq!(s.improvement(), Some(5.0));
    }

    #[test]
    fn test_improvement_absent_when_unmeasured() {
        assert_eq!(session(None, Some(MoodMeasure::Intensity(6))).improvement(), None);
        assert_eq!(session(None, None).improvement(), None);
    }
}
