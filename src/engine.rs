//! Single stateful entry point over the analysis components.
//!
//! One [`InsightEngine`] owns exactly one prediction model (network weights
//! plus training state); pattern detection, recommendation, and sentiment are
//! stateless and borrow the caller's history. Mutating operations take
//! `&mut self`, so concurrent training against one engine instance is ruled
//! out at the type level; read paths may run concurrently.

use crate::config::EngineConfig;
use crate::data::{MoodRecord, WellnessSessionRecord};
use crate::error::EngineResult;
use crate::neural::TrainingHistory;
use crate::patterns::{self, PatternReport};
use crate::predictor::{ModelState, MoodForecast, MoodPredictionModel};
use crate::recommend::{self, ContentCatalogs, RecommendationSet};
use crate::sentiment::{self, SentimentReport};
use crate::snapshot::ModelSnapshot;

/// Facade over the prediction, pattern, recommendation, and sentiment engines.
pub struct InsightEngine {
    config: EngineConfig,
    model: MoodPredictionModel,
}

impl InsightEngine {
    /// Build an engine from configuration. The network is initialized eagerly
    /// with the configured seed, so two engines with the same config start
    /// from identical weights.
    pub fn new(config: EngineConfig) -> Self {
        let model = MoodPredictionModel::new(config.network.clone(), config.seed);
        Self { config, model }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Train the prediction model on the supplied mood history.
    ///
    /// Histories producing fewer than 10 sliding-window pairs leave the model
    /// untrained and return a degenerate single-epoch history.
    pub fn train_models(&mut self, mood_history: &[MoodRecord]) -> TrainingHistory {
        self.model.train(mood_history)
    }

    /// Forecast the next `days_ahead` days (defaults to the configured
    /// horizon when `None`).
    pub fn predict_moods(
        &self,
        mood_history: &[MoodRecord],
        days_ahead: Option<usize>,
    ) -> MoodForecast {
        let days = days_ahead.unwrap_or(self.config.horizon_days);
        self.model.predict(mood_history, days)
    }

    /// Run all five pattern detectors and merge their findings.
    pub fn detect_patterns(
        &self,
        mood_history: &[MoodRecord],
        wellness_history: &[WellnessSessionRecord],
    ) -> PatternReport {
        patterns::detect_all(mood_history, wellness_history)
    }

    /// Score the supplied catalogs against the current mood state.
    pub fn generate_recommendations(
        &self,
        mood_history: &[MoodRecord],
        wellness_history: &[WellnessSessionRecord],
        catalogs: &ContentCatalogs,
        count: usize,
    ) -> RecommendationSet {
        recommend::recommend(mood_history, wellness_history, catalogs, count)
    }

    /// Lexicon-based sentiment analysis of free text.
    pub fn analyze_sentiment(&self, text: &str) -> SentimentReport {
        sentiment::analyze(text)
    }

    pub fn model_state(&self) -> &ModelState {
        self.model.state()
    }

    /// Export the full model for caller-owned persistence.
    pub fn export_model(&self) -> ModelSnapshot {
        ModelSnapshot::new(self.model.parameters(), self.model.state().clone())
    }

    /// Replace the model from a snapshot. Encoder and parameter shapes are
    /// validated first; on failure the previous model is left untouched.
    pub fn import_model(&mut self, snapshot: &ModelSnapshot) -> EngineResult<()> {
        snapshot.validate_encoder()?;
        self.model
            .restore(&snapshot.parameters, snapshot.state.clone())
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Emotion;
    use chrono::{Duration, TimeZone, Utc};

    fn history(len: usize) -> Vec<MoodRecord> {
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
    fn test_training_gate_through_facade() {
        let mut engine = InsightEngine::default();
        engine.train_models(&history(12));
        assert!(!engine.model_state().is_trained);

        engine.train_models(&history(40));
        assert!(engine.model_state().is_trained);
        assert_eq!(engine.model_state().data_points_processed, 33);
    }

    #[test]
    fn test_default_horizon_applies() {
        let engine = InsightEngine::default();
        let forecast = engine.predict_moods(&history(12), None);
        assert_eq!(forecast.daily.len(), engine.config().horizon_days);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut source = InsightEngine::default();
        source.train_models(&history(40));

        let snapshot = source.export_model();
        let json = snapshot.to_json().unwrap();

        let mut target = InsightEngine::default();
        target
            .import_model(&ModelSnapshot::from_json(&json).unwrap())
            .unwrap();
        assert!(target.model_state().is_trained);
        assert_eq!(
            target.model_state().data_points_processed,
            source.model_state().data_points_processed
        );
    }

    #[test]
    fn test_import_rejects_mismatched_shapes() {
        let mut engine = InsightEngine::default();
        let mut snapshot = engine.export_model();
        snapshot.parameters.bias2.push(0.0);

        assert!(engine.import_model(&snapshot).is_err());
        assert!(!engine.model_state().is_trained);
    }
}
