//! Feature extraction for the mood network.
//!
//! Each input is a fixed 48-dimension vector:
//!
//! | Index | Contents |
//! |---|---|
//! | 0-4 | cyclical hour-of-day (sin, cos), day-of-week (sin, cos), weekend flag |
//! | 5-46 | the 7 most recent records × 6 features each |
//! | 47 | short-term intensity trend over the newest 3 records |
//!
//! Per-record features: emotion index ÷ 10, intensity ÷ 10, cyclical hour of
//! that record, day-of-week fraction, and a high-intensity flag. Missing
//! history slots are filled with a neutral 0.5.

use std::f32::consts::TAU;

use chrono::{DateTime, Datelike, Timelike, Utc};
use ndarray::Array1;

use crate::data::{Emotion, MoodRecord};

/// Input feature vector length
pub const FEATURE_DIM: usize = 48;
/// Records per sliding window
pub const WINDOW: usize = 7;
/// Minimum prepared pairs before training is allowed
pub const MIN_TRAINING_PAIRS: usize = 10;

const NEUTRAL_FILL: f32 = 0.5;
const HIGH_INTENSITY: u8 = 7;

fn day_of_week(at: &DateTime<Utc>) -> f32 {
    at.weekday().num_days_from_monday() as f32
}

fn is_weekend(at: &DateTime<Utc>) -> bool {
    at.weekday().num_days_from_monday() >= 5
}

/// Extract the 48-dimension feature vector for `history` as seen at `at`.
///
/// Only the last [`WINDOW`] records of `history` contribute; the caller is
/// expected to pass records oldest-first.
pub fn extract(history: &[MoodRecord], at: DateTime<Utc>) -> Array1<f32> {
    let mut features = Array1::from_elem(FEATURE_DIM, 0.0f32);

    let hour = at.hour() as f32;
    let dow = day_of_week(&at);
    features[0] = (TAU * hour / 24.0).sin();
    features[1] = (TAU * hour / 24.0).cos();
    features[2] = (TAU * dow / 7.0).sin();
    features[3] = (TAU * dow / 7.0).cos();
    features[4] = if is_weekend(&at) { 1.0 } else { 0.0 };

    let start = history.len().saturating_sub(WINDOW);
    let recent = &history[start..];

    for slot in 0..WINDOW {
        let base = 5 + slot * 6;
        match recent.get(slot) {
            Some(record) => {
                let record_hour = record.timestamp.hour() as f32;
                features[base] = record.emotion as usize as f32 / 10.0;
                features[base + 1] = record.intensity as f32 / 10.0;
                features[base + 2] = (TAU * record_hour / 24.0).sin();
                features[base + 3] = (TAU * record_hour / 24.0).cos();
                features[base + 4] = day_of_week(&record.timestamp) / 7.0;
                features[base + 5] = if record.intensity >= HIGH_INTENSITY {
                    1.0
                } else {
                    0.0
                };
            }
            None => {
                for offset in 0..6 {
                    features[base + offset] = NEUTRAL_FILL;
                }
            }
        }
    }

    features[47] = short_term_trend(recent);

    features
}

/// `tanh((last - first) / 2)` over the newest 3 records, 0 when fewer.
fn short_term_trend(recent: &[MoodRecord]) -> f32 {
    if recent.len() < 3 {
        return 0.0;
    }
    let tail = &recent[recent.len() - 3..];
    let first = tail[0].intensity as f32;
    let last = tail[2].intensity as f32;
    ((last - first) / 2.0).tanh()
}

/// One-hot target vector for an emotion class.
pub fn one_hot(emotion: Emotion) -> Array1<f32> {
    let mut target = Array1::zeros(Emotion::num_classes());
    target[emotion as usize] = 1.0;
    target
}

/// Build one `(features, one-hot target)` pair per index `i ≥ 7` of the
/// history, using records `[i-7, i)` as the window and record `i`'s emotion
/// as the target class.
pub fn prepare_training_set(history: &[MoodRecord]) -> (Vec<Array1<f32>>, Vec<Array1<f32>>) {
    let mut inputs = Vec::new();
    let mut targets = Vec::new();

    for i in WINDOW..history.len() {
        let window = &history[i - WINDOW..i];
        inputs.push(extract(window, history[i].timestamp));
        targets.push(one_hot(history[i].emotion));
    }

    (inputs, targets)
}
