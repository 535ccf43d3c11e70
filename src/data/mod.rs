//! Domain records consumed by the analysis engines.
//!
//! Everything here is a request-scoped value object: callers own the history
//! and hand slices to the engines, which never retain them.

pub mod mood;
pub mod wellness;

pub use mood::{Emotion, MoodRecord};
pub use wellness::{MoodMeasure, SessionKind, WellnessSessionRecord};
