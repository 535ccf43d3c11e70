//! Lexicon-based sentiment analysis of free-text journal entries.
//!
//! No natural-language understanding beyond keyword and lexicon matching;
//! the output is a signed score, detected emotions, themes, and up to three
//! rule-based suggestions.

pub mod lexicon;

use serde::{Deserialize, Serialize};

use lexicon::{EMOTION_KEYWORDS, NEGATIVE_WORDS, POSITIVE_WORDS};

/// Score thresholds for the high/medium/low intensity labels.
const HIGH_MATCHES: usize = 2;
const MEDIUM_MATCHES: usize = 1;
/// Overall-score magnitude that qualifies as a clear outlook theme.
const THEME_THRESHOLD: f32 = 0.3;
const MAX_SUGGESTIONS: usize = 3;

/// Coarse label for how strongly an emotion showed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalIntensity {
    Low,
    Medium,
    High,
}

/// One detected emotion with its match count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionSignal {
    pub emotion: String,
    /// Number of keyword matches
    pub score: usize,
    pub intensity: SignalIntensity,
}

/// Full result of [`analyze`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    /// `(positive - negative) / max(positive + negative, 1)`, range [-1, 1]
    pub overall_score: f32,
    /// Detected emotions, sorted descending by score
    pub emotions: Vec<EmotionSignal>,
    pub themes: Vec<String>,
    /// Rule-based suggestions, at most 3
    pub suggestions: Vec<String>,
}

fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Analyze free text against the fixed lexicons.
///
/// Empty or non-lexical text yields a neutral, well-typed result rather than
/// an error.
pub fn analyze(text: &str) -> SentimentReport {
    let tokens: Vec<String> = text
        .split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect();

    let positive = tokens
        .iter()
        .filter(|t| POSITIVE_WORDS.contains(&t.as_str()))
        .count();
    let negative = tokens
        .iter()
        .filter(|t| NEGATIVE_WORDS.contains(&t.as_str()))
        .count();

    let overall_score = (positive as f32 - negative as f32) / (positive + negative).max(1) as f32;

    let mut emotions: Vec<EmotionSignal> = EMOTION_KEYWORDS
        .iter()
        .filter_map(|(emotion, keywords)| {
            let score = tokens
                .iter()
                .filter(|token| keywords.iter().any(|kw| token.contains(kw)))
                .count();
            if score == 0 {
                return None;
            }
            let intensity = if score > HIGH_MATCHES {
                SignalIntensity::High
            } else if score > MEDIUM_MATCHES {
                SignalIntensity::Medium
            } else {
                SignalIntensity::Low
            };
            Some(EmotionSignal {
                emotion: emotion.to_string(),
                score,
                intensity,
            })
        })
        .collect();
    emotions.sort_by(|a, b| b.score.cmp(&a.score));

    let themes = build_themes(overall_score, &emotions);
    let suggestions = build_suggestions(overall_score, &emotions);

    SentimentReport {
        overall_score,
        emotions,
        themes,
        suggestions,
    }
}

fn build_themes(score: f32, emotions: &[EmotionSignal]) -> Vec<String> {
    let mut themes = Vec::new();
    if score > THEME_THRESHOLD {
        themes.push("Positive outlook".to_string());
    } else if score < -THEME_THRESHOLD {
        themes.push("Challenging emotional state".to_string());
    }
    if let Some(top) = emotions.first() {
        themes.push(format!("Strong sense of feeling {}", top.emotion));
    }
    themes
}

fn build_suggestions(score: f32, emotions: &[EmotionSignal]) -> Vec<String> {
    let mut suggestions = Vec::new();
    let detected = |name: &str| emotions.iter().any(|e| e.emotion == name);

    if detected("anxious") {
        suggestions.push("Try a slow 4-7-8 breathing cycle to take the edge off".to_string());
    }
    if detected("stressed") {
        suggestions.push("Step away for a short break and pick one priority".to_string());
    }
    if detected("tired") {
        suggestions.push("Rest and hydration may matter more than productivity today".to_string());
    }
    if detected("sad") {
        suggestions.push("Acknowledge the feeling, and consider reaching out to someone".to_string());
    }
    if score > THEME_THRESHOLD {
        suggestions.push("Note what made today good so you can repeat it".to_string());
    } else if score < -THEME_THRESHOLD && suggestions.is_empty() {
        suggestions.push("Be kind to yourself; hard days pass".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
