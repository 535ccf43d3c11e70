//! Fixed word sets for sentiment scoring.
//!
//! Two polarity lexicons plus nine emotion keyword groups. Keywords are
//! matched as substrings of normalized tokens, so "worrying" and "worried"
//! both hit "worri".

/// Words counted toward the positive pole.
pub const POSITIVE_WORDS: [&str; 28] = [
    "happy",
    "joy",
    "joyful",
    "great",
    "good",
    "wonderful",
    "amazing",
    "love",
    "loved",
    "excited",
    "grateful",
    "thankful",
    "peaceful",
    "calm",
    "relaxed",
    "content",
    "proud",
    "hopeful",
    "optimistic",
    "energized",
    "refreshed",
    "accomplished",
    "confident",
    "blessed",
    "delighted",
    "cheerful",
    "bright",
    "better",
];

/// Words counted toward the negative pole.
pub const NEGATIVE_WORDS: [&str; 28] = [
    "sad",
    "unhappy",
    "depressed",
    "miserable",
    "terrible",
    "awful",
    "horrible",
    "bad",
    "angry",
    "furious",
    "annoyed",
    "frustrated",
    "anxious",
    "worried",
    "scared",
    "afraid",
    "stressed",
    "overwhelmed",
    "exhausted",
    "tired",
    "drained",
    "lonely",
    "hopeless",
    "hurt",
    "upset",
    "gloomy",
    "worse",
    "crying",
];

/// Emotion keyword groups: `(emotion label, trigger substrings)`.
pub const EMOTION_KEYWORDS: [(&str, &[&str]); 9] = [
    ("happy", &["happ", "joy", "delight", "cheer", "smil"]),
    ("calm", &["calm", "peace", "relax", "seren", "tranquil"]),
    ("anxious", &["anxi", "worri", "nervous", "panic", "uneas"]),
    ("stressed", &["stress", "overwhelm", "pressur", "tense", "burnout"]),
    ("sad", &["sad", "down", "depress", "miser", "cry", "grief"]),
    ("grateful", &["grateful", "thank", "bless", "appreciat"]),
    ("motivated", &["motivat", "driven", "determin", "focus", "inspir"]),
    ("tired", &["tired", "exhaust", "sleep", "fatigu", "drain"]),
    ("frustrated", &["frustrat", "annoy", "irritat", "anger", "angry"]),
];
