//! Weekly detector: weekday versus weekend mood intensity.

use chrono::Datelike;

use crate::data::MoodRecord;

use super::{DetectedPattern, PatternFinding, PatternInsight, PatternKind};

const MIN_ENTRIES: usize = 30;
const MIN_WEEKDAY: usize = 10;
const MIN_WEEKEND: usize = 5;
const THRESHOLD: f32 = 0.15;

fn is_weekend(record: &MoodRecord) -> bool {
    record.timestamp.weekday().num_days_from_monday() >= 5
}

/// Compare average intensity on weekdays against weekends (Sat/Sun).
pub fn detect(moods: &[MoodRecord]) -> Option<PatternFinding> {
    if moods.len() < MIN_ENTRIES {
        return None;
    }

    let (weekend, weekday): (Vec<&MoodRecord>, Vec<&MoodRecord>) =
        moods.iter().partition(|r| is_weekend(r));

    if weekday.len() < MIN_WEEKDAY || weekend.len() < MIN_WEEKEND {
        return None;
    }

    let weekday_avg =
        weekday.iter().map(|r| r.intensity as f32).sum::<f32>() / weekday.len() as f32;
    let weekend_avg =
        weekend.iter().map(|r| r.intensity as f32).sum::<f32>() / weekend.len() as f32;
    let strength = ((weekday_avg - weekend_avg).abs() / 10.0).min(1.0);

    if strength < THRESHOLD {
        return None;
    }

    let better = if weekend_avg >= weekday_avg {
        "weekends"
    } else {
        "weekdays"
    };

    let pattern = DetectedPattern {
        kind: PatternKind::Weekly,
        strength,
        description: format!(
            "Mood differs between weekdays ({:.1}) and weekends ({:.1})",
            weekday_avg, weekend_avg
        ),
        evidence: vec![
            format!("{} weekday entries, average {:.1}", weekday.len(), weekday_avg),
            format!("{} weekend entries, average {:.1}", weekend.len(), weekend_avg),
        ],
    };

    let insight = PatternInsight {
        title: "Weekly mood cycle".to_string(),
        description: format!("Your mood is consistently better on {}.", better),
        confidence: strength,
        recommendation: if better == "weekends" {
            "Carry one weekend habit into your work week.".to_string()
        } else {
            "Plan restorative weekend activities instead of unstructured time.".to_string()
        },
    };

    let recommendations = vec![
        format!("Note what {} do differently and borrow from it", better),
        "Review workload balance across the week".to_string(),
    ];

    Some(PatternFinding {
        pattern,
        insight,
        recommendations,
    })
}
