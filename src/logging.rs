use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::neural::TrainingHistory;
use crate::predictor::MoodForecast;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct TrainingLogEntry {
    pub epochs: usize,
    pub final_loss: f32,
    pub final_accuracy: f32,
    pub timestamp_ms: u128,
}

/// Append one training-run summary to `logs/training.jsonl`.
///
/// Opt-in: the engine never calls this itself, keeping the analysis path free
/// of I/O.
pub fn log_training_run(history: &TrainingHistory) -> io::Result<()> {
    log_dir()?;
    let entry = TrainingLogEntry {
        epochs: history.losses.len(),
        final_loss: history.final_loss(),
        final_accuracy: history.final_accuracy(),
        timestamp_ms: now_ms(),
    };
    append_json_line("logs/training.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct ForecastLogEntry {
    pub days: usize,
    pub trend: String,
    pub confidence: f32,
    pub timestamp_ms: u128,
}

/// Append one forecast summary to `logs/forecasts.jsonl`.
pub fn log_forecast(forecast: &MoodForecast) -> io::Result<()> {
    log_dir()?;
    let entry = ForecastLogEntry {
        days: forecast.daily.len(),
        trend: forecast.trend.label().to_string(),
        confidence: forecast.confidence,
        timestamp_ms: now_ms(),
    };
    append_json_line("logs/forecasts.jsonl", &entry)
}
