//! Trigger detector: sudden mood drops clustering at one time of day.

use std::collections::HashMap;

use chrono::Timelike;

use crate::data::MoodRecord;

use super::{DetectedPattern, PatternFinding, PatternInsight, PatternKind};

const MIN_ENTRIES: usize = 15;
const MIN_DROPS: usize = 3;
/// Consecutive-entry intensity fall that counts as a drop.
const DROP_POINTS: i16 = 2;
const MIN_CLUSTER: usize = 3;

/// Find consecutive-entry intensity drops of more than 2 points and check
/// whether they cluster in a single hour bucket.
pub fn detect(moods: &[MoodRecord]) -> Option<PatternFinding> {
    if moods.len() < MIN_ENTRIES {
        return None;
    }

    let drop_hours: Vec<u32> = moods
        .windows(2)
        .filter(|pair| pair[0].intensity as i16 - pair[1].intensity as i16 > DROP_POINTS)
        .map(|pair| pair[1].timestamp.hour())
        .collect();

    if drop_hours.len() < MIN_DROPS {
        return None;
    }

    let mut buckets: HashMap<u32, usize> = HashMap::new();
    for hour in &drop_hours {
        *buckets.entry(*hour).or_insert(0) += 1;
    }

    let (&peak_hour, &count) = buckets
        .iter()
        .max_by_key(|(hour, count)| (**count, std::cmp::Reverse(**hour)))?;

    if count < MIN_CLUSTER {
        return None;
    }

    let strength = count as f32 / drop_hours.len() as f32;

    let pattern = DetectedPattern {
        kind: PatternKind::Trigger,
        strength,
        description: format!(
            "Mood drops cluster around {:02}:00 ({} of {} drops)",
            peak_hour,
            count,
            drop_hours.len()
        ),
        evidence: vec![
            format!("{} sharp drops detected in total", drop_hours.len()),
            format!("{} of them landed in the {:02}:00 hour", count, peak_hour),
        ],
    };

    let insight = PatternInsight {
        title: "Recurring mood trigger".to_string(),
        description: format!(
            "Something around {:02}:00 repeatedly pulls your mood down.",
            peak_hour
        ),
        confidence: strength,
        recommendation: format!(
            "Note what happens around {:02}:00 on days when your mood dips.",
            peak_hour
        ),
    };

    let recommendations = vec![
        format!("Journal what precedes the {:02}:00 dip", peak_hour),
        "Plan a short buffer activity before the trigger window".to_string(),
    ];

    Some(PatternFinding {
        pattern,
        insight,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Emotion;
    use chrono::{Duration, TimeZone, Utc};

    fn record(day: i64, hour: u32, intensity: u8) -> MoodRecord {
        MoodRecord::new(
            Emotion::Calm,
            intensity,
            Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap() + Duration::days(day),
        )
    }

    #[test]
    fn test_fires_on_clustered_drops() {
        let mut moods = Vec::new();
        for day in 0..5 {
            moods.push(record(day, 9, 8));
            moods.push(record(day, 14, 4)); // drop of 4 points at 14:00
            moods.push(record(day, 19, 6));
        }

        let finding = detect(&moods).expect("pattern expected");
        assert_eq!(finding.pattern.kind, PatternKind::Trigger);
        assert!(finding.pattern.description.contains("14:00"));
        // every drop lands in the same bucket
        assert!((finding.pattern.strength - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_silent_when_drops_scatter() {
        let mut moods = Vec::new();
        let hours = [8, 11, 14, 17, 20];
        for (day, hour) in hours.iter().enumerate() {
            moods.push(record(day as i64, hour - 2, 8));
            moods.push(record(day as i64, *hour, 4));
            moods.push(record(day as i64, hour + 2, 6));
        }
        // five drops spread over five different hours, no bucket reaches 3
        assert!(detect(&moods).is_none());
    }

    #[test]
    fn test_silent_with_few_drops() {
        let mut moods: Vec<MoodRecord> = (0..20).map(|i| record(i, 12, 6)).collect();
        moods.push(record(20, 14, 2));
        // a single drop is not enough
        assert!(detect(&moods).is_none());
    }

    #[test]
    fn test_silent_below_entry_gate() {
        let moods: Vec<MoodRecord> = (0..10)
            .flat_map(|day| vec![record(day, 9, 9), record(day, 14, 3)])
            .collect::<Vec<_>>()
            .into_iter()
            .take(14)
            .collect();
        assert!(detect(&moods).is_none());
    }
}
