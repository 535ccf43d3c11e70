//! Pattern detection engine.
//!
//! Pure statistical analysis over mood and wellness-session histories. Each
//! detector requires a minimum sample count before running and stays silent
//! when the effect is below its significance threshold, so small samples
//! never produce spurious findings.

pub mod circadian;
pub mod response;
pub mod timing;
pub mod trigger;
pub mod weekly;

use serde::{Deserialize, Serialize};

use crate::data::{MoodRecord, WellnessSessionRecord};

/// The five statistical pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Circadian,
    Weekly,
    Trigger,
    Response,
    Correlation,
}

/// One statistical finding above threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedPattern {
    pub kind: PatternKind,
    /// Effect strength, 0-1
    pub strength: f32,
    pub description: String,
    pub evidence: Vec<String>,
}

/// Human-readable interpretation of a detected pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternInsight {
    pub title: String,
    pub description: String,
    pub confidence: f32,
    pub recommendation: String,
}

/// Everything one detector emits when it fires.
#[derive(Debug, Clone)]
pub struct PatternFinding {
    pub pattern: DetectedPattern,
    pub insight: PatternInsight,
    pub recommendations: Vec<String>,
}

/// Merged output of all detectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternReport {
    /// Top 10 patterns, strongest first
    pub patterns: Vec<DetectedPattern>,
    /// Top 5 insights
    pub insights: Vec<PatternInsight>,
    /// De-duplicated top 5 recommendation strings
    pub recommendations: Vec<String>,
}

const MAX_PATTERNS: usize = 10;
const MAX_INSIGHTS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 5;

/// Run every detector and merge the findings.
pub fn detect_all(moods: &[MoodRecord], sessions: &[WellnessSessionRecord]) -> PatternReport {
    let mut findings: Vec<PatternFinding> = [
        circadian::detect(moods),
        weekly::detect(moods),
        trigger::detect(moods),
        response::detect(sessions),
        timing::detect(sessions),
    ]
    .into_iter()
    .flatten()
    .collect();

    findings.sort_by(|a, b| {
        b.pattern
            .strength
            .partial_cmp(&a.pattern.strength)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut patterns = Vec::new();
    let mut insights = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    for finding in findings {
        if patterns.len() < MAX_PATTERNS {
            patterns.push(finding.pattern);
        }
        if insights.len() < MAX_INSIGHTS {
            insights.push(finding.insight);
        }
        for rec in finding.recommendations {
            if recommendations.len() >= MAX_RECOMMENDATIONS {
                break;
            }
            if !recommendations.contains(&rec) {
                recommendations.push(rec);
            }
        }
    }

    PatternReport {
        patterns,
        insights,
        recommendations,
    }
}
