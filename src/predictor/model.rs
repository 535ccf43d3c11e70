//! Mood prediction model: training bookkeeping and multi-day forecasting.

use chrono::{DateTime, Duration, Timelike, Utc};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;
use crate::data::{Emotion, MoodRecord};
use crate::error::EngineResult;
use crate::neural::{MoodNetwork, NetworkParameters, TrainingHistory};

use super::features::{self, MIN_TRAINING_PAIRS, WINDOW};

/// Slope magnitude beyond which the overall trend is no longer "stable".
const TREND_LABEL_THRESHOLD: f32 = 0.2;
/// Slope magnitude beyond which a trend factor is emitted.
const TREND_FACTOR_THRESHOLD: f32 = 0.1;

/// Training metadata for one model instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelState {
    pub version: u32,
    pub is_trained: bool,
    pub last_trained: Option<DateTime<Utc>>,
    pub accuracy: f32,
    pub loss: f32,
    pub data_points_processed: usize,
}

impl Default for ModelState {
    fn default() -> Self {
        Self {
            version: 1,
            is_trained: false,
            last_trained: None,
            accuracy: 0.0,
            loss: 0.0,
            data_points_processed: 0,
        }
    }
}

/// Overall direction of the recent mood trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Declining => "declining",
            TrendDirection::Stable => "stable",
        }
    }
}

/// A causal factor surfaced alongside a forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastFactor {
    pub name: String,
    /// Signed influence estimate, positive meaning mood-lifting
    pub influence: f32,
    pub description: String,
}

/// One forecast day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictedMood {
    pub date: DateTime<Utc>,
    pub emotion: Emotion,
    /// Derived intensity, 3-10
    pub intensity: u8,
    /// Probability mass of the selected class, 0-1
    pub confidence: f32,
}

/// Multi-day forecast returned by [`MoodPredictionModel::predict`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodForecast {
    /// One entry per requested day, chronologically ordered
    pub daily: Vec<PredictedMood>,
    pub trend: TrendDirection,
    /// Mean of the per-day confidences
    pub confidence: f32,
    pub factors: Vec<ForecastFactor>,
}

/// Owns one network instance plus its training metadata.
pub struct MoodPredictionModel {
    network: MoodNetwork,
    state: ModelState,
}

impl MoodPredictionModel {
    pub fn new(config: NetworkConfig, seed: u64) -> Self {
        let mut network = MoodNetwork::new(config, seed);
        network.initialize();
        Self {
            network,
            state: ModelState::default(),
        }
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn parameters(&self) -> NetworkParameters {
        self.network.parameters()
    }

    /// Restore parameters and state together. Shape validation happens before
    /// anything is mutated, so a failed restore leaves the model untouched.
    pub fn restore(&mut self, params: &NetworkParameters, state: ModelState) -> EngineResult<()> {
        self.network.load_parameters(params)?;
        self.state = state;
        Ok(())
    }

    /// Train on the supplied history using sliding-window pairs.
    ///
    /// Fewer than 10 prepared pairs returns a degenerate single-epoch history
    /// and leaves `is_trained` false.
    pub fn train(&mut self, history: &[MoodRecord]) -> TrainingHistory {
        let (inputs, targets) = features::prepare_training_set(history);
        if inputs.len() < MIN_TRAINING_PAIRS {
            return TrainingHistory::degenerate();
        }

        let epochs = self.network.config().epochs;
        let result = self.network.train(&inputs, &targets, epochs);

        self.state.is_trained = true;
        self.state.last_trained = Some(Utc::now());
        self.state.accuracy = result.final_accuracy();
        self.state.loss = result.final_loss();
        self.state.data_points_processed = inputs.len();
        self.state.version += 1;

        result
    }

    /// Forecast `days_ahead` days starting tomorrow, anchored at the current
    /// wall-clock time.
    pub fn predict(&self, history: &[MoodRecord], days_ahead: usize) -> MoodForecast {
        self.predict_at(history, days_ahead, Utc::now())
    }

    /// Forecast with an explicit anchor time.
    pub fn predict_at(
        &self,
        history: &[MoodRecord],
        days_ahead: usize,
        now: DateTime<Utc>,
    ) -> MoodForecast {
        let slope = recent_slope(history);
        let mut daily = Vec::with_capacity(days_ahead);
        let mut confidence_sum = 0.0;

        for day in 0..days_ahead {
            let date = now + Duration::days(day as i64 + 1);
            let input = features::extract(history, date);

            let probs = if self.state.is_trained {
                self.network.forward(&input)
            } else {
                fallback_distribution(history, slope)
            };

            let (class, p_max) = top_class(&probs);
            let emotion = Emotion::from_index(class).unwrap_or(Emotion::Happy);
            let intensity = (3.0 + p_max * 7.0).round().clamp(3.0, 10.0) as u8;

            confidence_sum += p_max;
            daily.push(PredictedMood {
                date,
                emotion,
                intensity,
                confidence: p_max,
            });
        }

        let confidence = if daily.is_empty() {
            0.0
        } else {
            confidence_sum / daily.len() as f32
        };

        MoodForecast {
            daily,
            trend: classify_trend(slope),
            confidence,
            factors: build_factors(slope, now),
        }
    }
}

/// Least-squares slope of intensity over the last ≤7 records.
fn recent_slope(history: &[MoodRecord]) -> f32 {
    let start = history.len().saturating_sub(WINDOW);
    let series: Vec<f32> = history[start..]
        .iter()
        .map(|record| record.intensity as f32)
        .collect();
    linear_slope(&series)
}

fn linear_slope(series: &[f32]) -> f32 {
    let len = series.len();
    if len < 2 {
        return 0.0;
    }

    let mut sum_x = 0.0f32;
    let mut sum_y = 0.0f32;
    let mut sum_xy = 0.0f32;
    let mut sum_x2 = 0.0f32;

    for (idx, &value) in series.iter().enumerate() {
        let x = idx as f32;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_x2 += x * x;
    }

    let n = len as f32;
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator.abs() < f32::EPSILON {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}

fn classify_trend(slope: f32) -> TrendDirection {
    if slope > TREND_LABEL_THRESHOLD {
        TrendDirection::Improving
    } else if slope < -TREND_LABEL_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}

/// Rule-based class distribution used while the model is untrained: a
/// smoothed histogram of the recent emotions, with positive or negative class
/// mass lifted according to the trend sign, normalized to sum to 1.
fn fallback_distribution(history: &[MoodRecord], slope: f32) -> Array1<f32> {
    let classes = Emotion::num_classes();
    let mut weights = Array1::from_elem(classes, 0.5f32);

    let start = history.len().saturating_sub(WINDOW * 2);
    for record in &history[start..] {
        weights[record.emotion as usize] += 1.0;
    }

    if slope.abs() > TREND_FACTOR_THRESHOLD {
        let boost = 1.0 + slope.abs().min(1.0);
        for emotion in Emotion::all() {
            let lifted = if slope > 0.0 {
                emotion.is_positive()
            } else {
                !emotion.is_positive()
            };
            if lifted {
                weights[emotion as usize] *= boost;
            }
        }
    }

    let total = weights.sum();
    weights / total
}

fn top_class(probs: &Array1<f32>) -> (usize, f32) {
    probs
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, &p)| (idx, p))
        .unwrap_or((0, 0.0))
}

fn build_factors(slope: f32, now: DateTime<Utc>) -> Vec<ForecastFactor> {
    let mut factors = Vec::new();

    if slope > TREND_FACTOR_THRESHOLD {
        factors.push(ForecastFactor {
            name: "Upward trend".to_string(),
            influence: slope.min(1.0),
            description: "Recent mood intensity has been rising".to_string(),
        });
    } else if slope < -TREND_FACTOR_THRESHOLD {
        factors.push(ForecastFactor {
            name: "Downward trend".to_string(),
            influence: slope.max(-1.0),
            description: "Recent mood intensity has been falling".to_string(),
        });
    }

    if (5..=11).contains(&now.hour()) {
        factors.push(ForecastFactor {
            name: "Morning energy".to_string(),
            influence: 0.3,
            description: "Mornings tend to carry higher energy levels".to_string(),
        });
    }

    factors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series(emotions: &[(Emotion, u8)]) -> Vec<MoodRecord> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        emotions
            .iter()
            .enumerate()
            .map(|(i, &(emotion, intensity))| {
                MoodRecord::new(emotion, intensity, start + Duration::hours(i as i64 * 8))
            })
            .collect()
    }

    fn long_series(len: usize) -> Vec<MoodRecord> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        (0..len)
            .map(|i| {
                MoodRecord::new(
                    Emotion::from_index(i % 10).unwrap(),
                    ((i % 9) + 1) as u8,
                    start + Duration::hours(i as i64 * 6),
                )
            })
            .collect()
    }

    #[test]
    fn test_training_gate_below_minimum() {
        let mut model = MoodPredictionModel::new(NetworkConfig::default(), 42);
        // 16 records ⇒ 9 pairs, one short of the minimum
        let history = model.train(&long_series(16));
        assert_eq!(history.losses.len(), 1);
        assert!(!model.state().is_trained);
        assert_eq!(model.state().data_points_processed, 0);
    }

    #[test]
    fn test_training_sets_state() {
        let config = NetworkConfig {
            epochs: 5,
            ..NetworkConfig::default()
        };
        let mut model = MoodPredictionModel::new(config, 42);
        let history = long_series(30);
        let result = model.train(&history);

        assert_eq!(result.losses.len(), 5);
        assert!(model.state().is_trained);
        assert!(model.state().last_trained.is_some());
        assert_eq!(model.state().data_points_processed, 30 - WINDOW);
        assert_eq!(model.state().version, 2);
    }

    #[test]
    fn test_forecast_has_increasing_dates() {
        let model = MoodPredictionModel::new(NetworkConfig::default(), 42);
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let forecast = model.predict_at(&long_series(12), 5, now);

        assert_eq!(forecast.daily.len(), 5);
        for pair in forecast.daily.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        for day in &forecast.daily {
            assert!((3..=10).contains(&day.intensity));
            assert!((0.0..=1.0).contains(&day.confidence));
        }
    }

    #[test]
    fn test_untrained_fallback_follows_histogram() {
        let model = MoodPredictionModel::new(NetworkConfig::default(), 42);
        let history = series(&[
            (Emotion::Calm, 6),
            (Emotion::Calm, 6),
            (Emotion::Calm, 6),
            (Emotion::Calm, 6),
            (Emotion::Happy, 6),
        ]);
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let forecast = model.predict_at(&history, 3, now);

        assert!(!model.state().is_trained);
        for day in &forecast.daily {
            assert_eq!(day.emotion, Emotion::Calm);
        }
    }

    #[test]
    fn test_fallback_distribution_is_normalized() {
        let history = series(&[(Emotion::Sad, 2), (Emotion::Sad, 3), (Emotion::Anxious, 4)]);
        for slope in [-0.8f32, 0.0, 0.8] {
            let dist = fallback_distribution(&history, slope);
            assert!((dist.sum() - 1.0).abs() < 1e-5);
            assert!(dist.iter().all(|&p| p > 0.0));
        }
    }

    #[test]
    fn test_fallback_trend_shifts_mass() {
        let history = series(&[(Emotion::Calm, 5), (Emotion::Sad, 5)]);
        let declining = fallback_distribution(&history, -0.9);
        let improving = fallback_distribution(&history, 0.9);
        let negative_mass = |d: &Array1<f32>| {
            Emotion::all()
                .iter()
                .filter(|e| !e.is_positive())
                .map(|e| d[*e as usize])
                .sum::<f32>()
        };
        assert!(negative_mass(&declining) > negative_mass(&improving));
    }

    #[test]
    fn test_trend_classification_thresholds() {
        assert_eq!(classify_trend(0.25), TrendDirection::Improving);
        assert_eq!(classify_trend(-0.25), TrendDirection::Declining);
        assert_eq!(classify_trend(0.1), TrendDirection::Stable);
        assert_eq!(classify_trend(-0.15), TrendDirection::Stable);
    }

    #[test]
    fn test_linear_slope_matches_manual_estimate() {
        let series: Vec<f32> = (0..7).map(|i| 2.0 + 0.5 * i as f32).collect();
        assert!((linear_slope(&series) - 0.5).abs() < 1e-5);
        assert_eq!(linear_slope(&[4.0]), 0.0);
    }

    #[test]
    fn test_morning_factor_window() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 10, 8, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2025, 3, 10, 22, 0, 0).unwrap();
        assert!(build_factors(0.0, morning)
            .iter()
            .any(|f| f.name == "Morning energy"));
        assert!(build_factors(0.0, night).is_empty());
    }

    #[test]
    fn test_trend_factor_emitted_above_threshold() {
        let at = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        assert!(build_factors(0.5, at).iter().any(|f| f.name == "Upward trend"));
        assert!(build_factors(-0.5, at)
            .iter()
            .any(|f| f.name == "Downward trend"));
        assert!(build_factors(0.05, at).is_empty());
    }

    #[test]
    fn test_restore_round_trip() {
        let config = NetworkConfig {
            epochs: 3,
            ..NetworkConfig::default()
        };
        let mut model = MoodPredictionModel::new(config.clone(), 42);
        model.train(&long_series(30));

        let params = model.parameters();
        let state = model.state().clone();

        let mut restored = MoodPredictionModel::new(config, 0);
        restored.restore(&params, state).unwrap();

        assert!(restored.state().is_trained);
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap();
        let history = long_series(12);
        let a = model.predict_at(&history, 3, now);
        let b = restored.predict_at(&history, 3, now);
        for (da, db) in a.daily.iter().zip(b.daily.iter()) {
            assert_eq!(da.emotion, db.emotion);
            assert_eq!(da.confidence, db.confidence);
        }
    }
}
