//! Timing correlation detector: preferred hour of wellness activity.

use std::collections::HashMap;

use chrono::Timelike;

use crate::data::WellnessSessionRecord;

use super::{DetectedPattern, PatternFinding, PatternInsight, PatternKind};

const MIN_SESSIONS: usize = 10;
const MIN_PER_HOUR: usize = 3;

/// Hour-of-day histogram over the session history; fires when any single
/// hour accounts for at least 3 sessions.
pub fn detect(sessions: &[WellnessSessionRecord]) -> Option<PatternFinding> {
    if sessions.len() < MIN_SESSIONS {
        return None;
    }

    let mut buckets: HashMap<u32, usize> = HashMap::new();
    for session in sessions {
        *buckets.entry(session.completed_at.hour()).or_insert(0) += 1;
    }

    let (&peak_hour, &count) = buckets
        .iter()
        .max_by_key(|(hour, count)| (**count, std::cmp::Reverse(**hour)))?;

    if count < MIN_PER_HOUR {
        return None;
    }

    let strength = count as f32 / sessions.len() as f32;

    let pattern = DetectedPattern {
        kind: PatternKind::Correlation,
        strength,
        description: format!(
            "Wellness sessions concentrate around {:02}:00 ({} of {})",
            peak_hour,
            count,
            sessions.len()
        ),
        evidence: vec![format!(
            "{} of {} sessions completed in the {:02}:00 hour",
            count,
            sessions.len(),
            peak_hour
        )],
    };

    let insight = PatternInsight {
        title: "Natural practice window".to_string(),
        description: format!("You consistently make time around {:02}:00.", peak_hour),
        confidence: strength,
        recommendation: format!("Anchor new wellness habits to your {:02}:00 slot.", peak_hour),
    };

    let recommendations = vec![format!(
        "Schedule sessions near {:02}:00, when you already show up",
        peak_hour
    )];

    Some(PatternFinding {
        pattern,
        insight,
        recommendations,
    })
}
