//! Mood prediction model.
//!
//! Translates mood history into the network's fixed 48-dimension feature
//! space and turns network output into interpretable multi-day forecasts.

pub mod features;
pub mod model;

pub use model::{
    ForecastFactor, ModelState, MoodForecast, MoodPredictionModel, PredictedMood, TrendDirection,
};
