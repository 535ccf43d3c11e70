//! Circadian detector: morning versus evening mood intensity.

use chrono::Timelike;

use crate::data::MoodRecord;

use super::{DetectedPattern, PatternFinding, PatternInsight, PatternKind};

const MIN_ENTRIES: usize = 20;
const MIN_PER_BUCKET: usize = 5;
/// Normalized intensity difference below which no pattern is emitted.
const THRESHOLD: f32 = 0.2;

const MORNING: std::ops::RangeInclusive<u32> = 5..=11;
const EVENING: std::ops::RangeInclusive<u32> = 17..=21;

/// Compare average intensity in the morning (5-11h) and evening (17-21h)
/// buckets. Fires when the normalized gap reaches 0.2.
pub fn detect(moods: &[MoodRecord]) -> Option<PatternFinding> {
    if moods.len() < MIN_ENTRIES {
        return None;
    }

    let morning: Vec<f32> = moods
        .iter()
        .filter(|r| MORNING.contains(&r.timestamp.hour()))
        .map(|r| r.intensity as f32)
        .collect();
    let evening: Vec<f32> = moods
        .iter()
        .filter(|r| EVENING.contains(&r.timestamp.hour()))
        .map(|r| r.intensity as f32)
        .collect();

    if morning.len() < MIN_PER_BUCKET || evening.len() < MIN_PER_BUCKET {
        return None;
    }

    let morning_avg = morning.iter().sum::<f32>() / morning.len() as f32;
    let evening_avg = evening.iter().sum::<f32>() / evening.len() as f32;
    let strength = ((morning_avg - evening_avg).abs() / 10.0).min(1.0);

    if strength < THRESHOLD {
        return None;
    }

    let (better, better_label) = if morning_avg >= evening_avg {
        ("morning", "mornings")
    } else {
        ("evening", "evenings")
    };

    let pattern = DetectedPattern {
        kind: PatternKind::Circadian,
        strength,
        description: format!(
            "Mood runs noticeably higher in the {} ({:.1} vs {:.1})",
            better,
            morning_avg.max(evening_avg),
            morning_avg.min(evening_avg)
        ),
        evidence: vec![
            format!("{} morning entries, average {:.1}", morning.len(), morning_avg),
            format!("{} evening entries, average {:.1}", evening.len(), evening_avg),
        ],
    };

    let insight = PatternInsight {
        title: "Circadian mood rhythm".to_string(),
        description: format!(
            "Your mood follows a daily rhythm, peaking in the {}.",
            better
        ),
        confidence: strength,
        recommendation: format!("Schedule demanding tasks for {}.", better_label),
    };

    let recommendations = vec![
        format!("Plan important activities during {}", better_label),
        "Keep a consistent sleep schedule to stabilize the rhythm".to_string(),
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

    fn entries(hour: u32, intensity: u8, count: usize, day_offset: i64) -> Vec<MoodRecord> {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap();
        (0..count)
            .map(|i| {
                MoodRecord::new(
                    Emotion::Calm,
                    intensity,
                    base + Duration::days(day_offset + i as i64),
                )
            })
            .collect()
    }

    #[test]
    fn test_fires_on_large_gap() {
        // 8 mornings at 8, 12 evenings at 4 ⇒ ratio 0.4
        let mut moods = entries(8, 8, 8, 0);
        moods.extend(entries(19, 4, 12, 0));

        let finding = detect(&moods).expect("pattern expected");
        assert_eq!(finding.pattern.kind, PatternKind::Circadian);
        assert!((finding.pattern.strength - 0.4).abs() < 0.01);
        assert_eq!(finding.pattern.evidence.len(), 2);
    }

    #[test]
    fn test_silent_below_threshold() {
        // Gap of 1 point ⇒ ratio 0.1, under the 0.2 threshold
        let mut moods = entries(8, 6, 10, 0);
        moods.extend(entries(19, 5, 10, 0));
        assert!(detect(&moods).is_none());
    }

    #[test]
    fn test_silent_with_too_few_entries() {
        let mut moods = entries(8, 9, 6, 0);
        moods.extend(entries(19, 2, 6, 0));
        // only 12 entries in total, below the 20-entry gate
        assert!(detect(&moods).is_none());
    }

    #[test]
    fn test_silent_with_sparse_bucket() {
        // 20+ entries but fewer than 5 in the evening bucket
        let mut moods = entries(8, 8, 17, 0);
        moods.extend(entries(19, 3, 4, 0));
        assert!(detect(&moods).is_none());
    }
}
