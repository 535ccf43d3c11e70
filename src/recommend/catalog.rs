//! Content catalogs and the fixed emotion→category lookup tables.

use serde::{Deserialize, Serialize};

use crate::data::{Emotion, SessionKind};

/// One entry of a wellness-content catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub title: String,
    pub category: String,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
        }
    }
}

/// The three catalogs the engine scores against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentCatalogs {
    pub meditation: Vec<ContentItem>,
    pub yoga: Vec<ContentItem>,
    pub music: Vec<ContentItem>,
}

impl ContentCatalogs {
    pub fn items(&self, kind: SessionKind) -> &[ContentItem] {
        match kind {
            SessionKind::Meditation => &self.meditation,
            SessionKind::Yoga => &self.yoga,
            SessionKind::Music => &self.music,
        }
    }
}

/// Target content category for the current emotion, per catalog.
pub fn target_category(kind: SessionKind, emotion: Emotion) -> &'static str {
    match kind {
        SessionKind::Meditation => match emotion {
            Emotion::Happy | Emotion::Grateful => "gratitude",
            Emotion::Calm => "mindfulness",
            Emotion::Energetic | Emotion::Motivated => "focus",
            Emotion::Sad => "self-compassion",
            Emotion::Anxious => "anxiety",
            Emotion::Stressed => "stress-relief",
            Emotion::Tired => "sleep",
            Emotion::Frustrated => "letting-go",
        },
        SessionKind::Yoga => match emotion {
            Emotion::Happy | Emotion::Grateful => "flow",
            Emotion::Calm => "hatha",
            Emotion::Energetic => "vinyasa",
            Emotion::Motivated => "power",
            Emotion::Sad => "heart-opening",
            Emotion::Anxious => "yin",
            Emotion::Stressed | Emotion::Frustrated => "restorative",
            Emotion::Tired => "gentle",
        },
        SessionKind::Music => match emotion {
            Emotion::Happy | Emotion::Energetic => "upbeat",
            Emotion::Calm => "ambient",
            Emotion::Grateful => "acoustic",
            Emotion::Motivated => "focus",
            Emotion::Sad => "uplifting",
            Emotion::Anxious | Emotion::Frustrated => "calm",
            Emotion::Stressed => "ambient",
            Emotion::Tired => "energizing",
        },
    }
}

/// Generic fallback category always considered alongside the target.
pub fn fallback_category(kind: SessionKind) -> &'static str {
    match kind {
        SessionKind::Meditation => "mindfulness",
        SessionKind::Yoga => "gentle",
        SessionKind::Music => "ambient",
    }
}

/// Human-readable predicted effect, keyed by category.
pub fn predicted_effect(category: &str) -> &'static str {
    match category {
        "anxiety" | "yin" | "calm" => "Eases anxious thoughts and slows your breathing",
        "stress-relief" | "restorative" => "Releases built-up tension",
        "self-compassion" | "heart-opening" | "uplifting" => "Gently lifts a low mood",
        "sleep" | "gentle" => "Helps your body wind down",
        "focus" | "power" => "Sharpens concentration and drive",
        "gratitude" | "acoustic" => "Reinforces a positive outlook",
        "mindfulness" | "hatha" | "ambient" => "Settles your attention in the present",
        "energizing" | "upbeat" | "vinyasa" | "flow" => "Raises energy levels",
        _ => "Supports overall wellbeing",
    }
}

/// Whether this category addresses a low or unstable mood, making it
/// boost-eligible when the trend is declining.
pub fn mood_relevant(category: &str) -> bool {
    matches!(
        category,
        "anxiety"
            | "stress-relief"
            | "self-compassion"
            | "letting-go"
            | "yin"
            | "restorative"
            | "heart-opening"
            | "calm"
            | "uplifting"
            | "sleep"
    )
}
