//! Catalog scoring, personalized tips, and the optimal schedule.

use std::collections::HashMap;

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::data::{Emotion, MoodRecord, SessionKind, WellnessSessionRecord};

use super::catalog::{
    fallback_category, mood_relevant, predicted_effect, target_category, ContentCatalogs,
};

/// Candidates taken from each catalog before merging.
const TOP_PER_CATALOG: usize = 3;
/// Base score for the best-ranked item in a catalog.
const BASE_SCORE: f32 = 0.9;
/// Score decay per rank within a catalog.
const RANK_DECAY: f32 = 0.15;
/// Boost applied when the trend or volatility makes an item urgent.
const URGENCY_BOOST: f32 = 0.15;
/// Standard deviation of recent intensities above which mood counts as volatile.
const VOLATILITY_THRESHOLD: f32 = 2.0;
/// Negative slope below which the recent trend counts as declining.
const DECLINE_THRESHOLD: f32 = -0.2;
const LOW_INTENSITY_MEAN: f32 = 4.0;
const SCHEDULE_SLOTS: usize = 3;

/// How soon the user should act on a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// One scored content item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecommendation {
    pub session_type: SessionKind,
    pub title: String,
    /// 0-1, clipped
    pub score: f32,
    pub reasoning: Vec<String>,
    pub urgency: Urgency,
    pub predicted_effect: String,
}

/// One entry of the optimal schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub hour: u32,
    pub activity: String,
    /// This hour's share of all sessions
    pub confidence: f32,
}

/// Full output of the recommendation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Sorted non-increasing by score, truncated to the requested count
    pub recommendations: Vec<SessionRecommendation>,
    pub personalized_tips: Vec<String>,
    pub optimal_schedule: Vec<ScheduleSlot>,
}

/// Mean, spread, and slope of the last 7 intensities.
struct MoodSummary {
    current: Emotion,
    mean: f32,
    stddev: f32,
    declining: bool,
}

fn summarize(moods: &[MoodRecord]) -> MoodSummary {
    let current = moods.last().map(|r| r.emotion).unwrap_or(Emotion::Calm);
    let start = moods.len().saturating_sub(7);
    let recent: Vec<f32> = moods[start..].iter().map(|r| r.intensity as f32).collect();

    if recent.is_empty() {
        return MoodSummary {
            current,
            mean: 5.0,
            stddev: 0.0,
            declining: false,
        };
    }

    let mean = recent.iter().sum::<f32>() / recent.len() as f32;
    let variance =
        recent.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / recent.len() as f32;
    let slope = slope_of(&recent);

    MoodSummary {
        current,
        mean,
        stddev: variance.sqrt(),
        declining: slope < DECLINE_THRESHOLD,
    }
}

fn slope_of(series: &[f32]) -> f32 {
    let len = series.len();
    if len < 2 {
        return 0.0;
    }
    let n = len as f32;
    let sum_x = (0..len).map(|i| i as f32).sum::<f32>();
    let sum_y: f32 = series.iter().sum();
    let sum_xy: f32 = series.iter().enumerate().map(|(i, &v)| i as f32 * v).sum();
    let sum_x2: f32 = (0..len).map(|i| (i * i) as f32).sum();
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f32::EPSILON {
        return 0.0;
    }
    (n * sum_xy - sum_x * sum_y) / denominator
}

/// Score all three catalogs against the current mood state.
pub fn recommend(
    moods: &[MoodRecord],
    sessions: &[WellnessSessionRecord],
    catalogs: &ContentCatalogs,
    count: usize,
) -> RecommendationSet {
    let summary = summarize(moods);
    let volatile = summary.stddev > VOLATILITY_THRESHOLD;

    let mut recommendations = Vec::new();
    for kind in [SessionKind::Meditation, SessionKind::Yoga, SessionKind::Music] {
        score_catalog(kind, catalogs, &summary, volatile, &mut recommendations);
    }

    recommendations.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    recommendations.truncate(count);

    RecommendationSet {
        recommendations,
        personalized_tips: personalized_tips(&summary, volatile),
        optimal_schedule: optimal_schedule(sessions),
    }
}

fn score_catalog(
    kind: SessionKind,
    catalogs: &ContentCatalogs,
    summary: &MoodSummary,
    volatile: bool,
    out: &mut Vec<SessionRecommendation>,
) {
    let target = target_category(kind, summary.current);
    let fallback = fallback_category(kind);

    let items = catalogs.items(kind);
    let candidates: Vec<_> = items
        .iter()
        .filter(|item| item.category == target)
        .chain(items.iter().filter(|item| {
            item.category == fallback && fallback != target
        }))
        .take(TOP_PER_CATALOG)
        .collect();

    for (rank, item) in candidates.into_iter().enumerate() {
        let mut score = BASE_SCORE - RANK_DECAY * rank as f32;
        let mut urgency = if rank == 0 { Urgency::Medium } else { Urgency::Low };
        let mut reasoning = vec![format!(
            "{} matches your current {} mood",
            item.category,
            summary.current.label()
        )];

        if summary.declining && mood_relevant(&item.category) {
            score += URGENCY_BOOST;
            urgency = Urgency::High;
            reasoning.push("your mood has been trending down".to_string());
        }
        if volatile {
            score += URGENCY_BOOST;
            urgency = Urgency::High;
            reasoning.push("your mood has been swinging a lot lately".to_string());
        }

        out.push(SessionRecommendation {
            session_type: kind,
            title: item.title.clone(),
            score: score.clamp(0.0, 1.0),
            reasoning,
            urgency,
            predicted_effect: predicted_effect(&item.category).to_string(),
        });
    }
}

fn personalized_tips(summary: &MoodSummary, volatile: bool) -> Vec<String> {
    let mut tips = Vec::new();

    if summary.declining {
        tips.push("Try a short meditation today, even five minutes helps".to_string());
        tips.push("Aim for an earlier bedtime while your mood recovers".to_string());
    }
    if volatile {
        tips.push("A consistent daily routine can steady mood swings".to_string());
        tips.push("Journaling for a few minutes helps surface what drives the swings".to_string());
    }
    if summary.mean < LOW_INTENSITY_MEAN {
        tips.push("Favor gentle activities over demanding ones for now".to_string());
    }
    if matches!(summary.current, Emotion::Anxious | Emotion::Stressed) {
        tips.push("Try a 4-7-8 breathing cycle when tension rises".to_string());
    }

    tips
}

/// The 3 most frequent session hours, labelled with a time-of-day-appropriate
/// activity; confidence is the hour's share of all sessions.
fn optimal_schedule(sessions: &[WellnessSessionRecord]) -> Vec<ScheduleSlot> {
    if sessions.is_empty() {
        return Vec::new();
    }

    let mut buckets: HashMap<u32, usize> = HashMap::new();
    for session in sessions {
        *buckets.entry(session.completed_at.hour()).or_insert(0) += 1;
    }

    let mut counted: Vec<(u32, usize)> = buckets.into_iter().collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    counted
        .into_iter()
        .take(SCHEDULE_SLOTS)
        .map(|(hour, count)| ScheduleSlot {
            hour,
            activity: activity_for_hour(hour).to_string(),
            confidence: count as f32 / sessions.len() as f32,
        })
        .collect()
}

fn activity_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Morning meditation",
        12..=16 => "Afternoon yoga break",
        17..=21 => "Evening wind-down music",
        _ => "Late-night breathing exercise",
    }
}
