//! Recommendation engine.
//!
//! Scores caller-supplied content catalogs against current mood state and
//! recent trend. Stateless; the caller owns the catalogs.

pub mod catalog;
pub mod engine;

pub use catalog::{ContentCatalogs, ContentItem};
pub use engine::{
    recommend, RecommendationSet, ScheduleSlot, SessionRecommendation, Urgency,
};
