//! Response detector: which activity kind actually moves mood.

use std::collections::HashMap;

use crate::data::{SessionKind, WellnessSessionRecord};

use super::{DetectedPattern, PatternFinding, PatternInsight, PatternKind};

/// Sessions carrying both a before and an after measurement.
const MIN_MEASURED: usize = 5;
const MIN_AVG_IMPROVEMENT: f32 = 0.5;
const MIN_POSITIVE_RATE: f32 = 0.6;

/// Per-activity mood effect. Requires 5 sessions with before/after mood; an
/// activity qualifies when its average improvement exceeds 0.5 points or more
/// than 60% of its sessions improved mood. The strongest qualifying activity
/// is reported.
pub fn detect(sessions: &[WellnessSessionRecord]) -> Option<PatternFinding> {
    let measured: Vec<(&WellnessSessionRecord, f32)> = sessions
        .iter()
        .filter_map(|s| s.improvement().map(|delta| (s, delta)))
        .collect();

    if measured.len() < MIN_MEASURED {
        return None;
    }

    let mut by_kind: HashMap<SessionKind, Vec<f32>> = HashMap::new();
    for (session, delta) in &measured {
        by_kind.entry(session.kind).or_default().push(*delta);
    }

    let mut best: Option<(SessionKind, f32, f32, usize)> = None;
    for (kind, deltas) in by_kind {
        let count = deltas.len();
        let avg = deltas.iter().sum::<f32>() / count as f32;
        let positive_rate = deltas.iter().filter(|&&d| d > 0.0).count() as f32 / count as f32;

        if avg > MIN_AVG_IMPROVEMENT || positive_rate > MIN_POSITIVE_RATE {
            let strength = (avg.abs() / 3.0).min(1.0);
            let replace = match best {
                Some((_, existing, _, _)) => strength > existing,
                None => true,
            };
            if replace {
                best = Some((kind, strength, avg, count));
            }
        }
    }

    let (kind, strength, avg, count) = best?;

    let pattern = DetectedPattern {
        kind: PatternKind::Response,
        strength,
        description: format!(
            "{} sessions improve your mood by {:.1} points on average",
            kind.label(),
            avg
        ),
        evidence: vec![
            format!("{} measured {} sessions", count, kind.label()),
            format!("average before→after change of {:+.1}", avg),
        ],
    };

    let insight = PatternInsight {
        title: "Effective activity".to_string(),
        description: format!("{} reliably lifts your mood.", kind.label()),
        confidence: strength,
        recommendation: format!("Reach for {} when your mood dips.", kind.label()),
    };

    let recommendations = vec![
        format!("Keep {} in your regular routine", kind.label()),
        format!("Try {} earlier in the day for a lasting effect", kind.label()),
    ];

    Some(PatternFinding {
        pattern,
        insight,
        recommendations,
    })
}
