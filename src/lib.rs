//! # Mood Insight Core
//!
//! A client-resident analytics engine that turns a user's time-stamped
//! mood and activity history into short-horizon forecasts, detected
//! behavioral patterns, ranked wellness-content recommendations, and lexical
//! sentiment analysis of journal text.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use mood_insight_core::{Emotion, InsightEngine, MoodRecord};
//!
//! let engine = InsightEngine::default();
//!
//! let history = vec![
//!     MoodRecord::new(Emotion::Calm, 6, Utc::now()),
//!     MoodRecord::new(Emotion::Happy, 7, Utc::now()),
//! ];
//!
//! // Too little history to train: the forecast falls back to a rule-based
//! // distribution instead of failing.
//! let forecast = engine.predict_moods(&history, Some(3));
//! assert_eq!(forecast.daily.len(), 3);
//!
//! let sentiment = engine.analyze_sentiment("grateful for a peaceful morning");
//! assert!(sentiment.overall_score > 0.0);
//! ```
//!
//! ## Core Modules
//!
//! - [`config`] - Engine configuration via TOML
//! - [`neural`] - Two-layer network with manual backpropagation
//! - [`predictor`] - Feature extraction and multi-day forecasting
//! - [`patterns`] - Threshold-gated statistical pattern detectors
//! - [`recommend`] - Catalog scoring and scheduling
//! - [`sentiment`] - Lexicon-based text analysis
//! - [`logging`] - JSON line-delimited run logs (opt-in)

pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod logging;
pub mod neural;
pub mod patterns;
pub mod predictor;
pub mod recommend;
pub mod sentiment;
pub mod snapshot;

pub use config::{ConfigError, EngineConfig, NetworkConfig};
pub use data::{Emotion, MoodMeasure, MoodRecord, SessionKind, WellnessSessionRecord};
pub use engine::InsightEngine;
pub use error::{EngineError, EngineResult};
pub use neural::{MoodNetwork, NetworkParameters, TrainingHistory};
pub use patterns::{
    detect_all, DetectedPattern, PatternInsight, PatternKind, PatternReport,
};
pub use predictor::{
    ForecastFactor, ModelState, MoodForecast, MoodPredictionModel, PredictedMood, TrendDirection,
};
pub use recommend::{
    recommend, ContentCatalogs, ContentItem, RecommendationSet, ScheduleSlot,
    SessionRecommendation, Urgency,
};
pub use sentiment::{analyze, EmotionSignal, SentimentReport, SignalIntensity};
pub use snapshot::ModelSnapshot;
