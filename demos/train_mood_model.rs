//! Training demo for the mood prediction model.
//!
//! Builds a synthetic three-week mood diary with a clear daily rhythm,
//! trains the network on it, and walks through the full analysis surface:
//! forecast, patterns, recommendations, and sentiment.

use chrono::{Duration, TimeZone, Utc};
use mood_insight_core::{
    ContentCatalogs, ContentItem, Emotion, EngineConfig, InsightEngine, MoodMeasure, MoodRecord,
    SessionKind, WellnessSessionRecord,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧠 Mood Insight - Model Training Demo");
    println!("=====================================\n");

    let config = EngineConfig::default();
    println!("Configuration:");
    println!("  Hidden size: {}", config.network.hidden_size);
    println!("  Learning rate: {}", config.network.learning_rate);
    println!("  Epochs: {}", config.network.epochs);
    println!("  Forecast horizon: {} days", config.horizon_days);
    println!("  Seed: {}", config.seed);
    println!();

    // Synthetic diary: energetic mornings, calm afternoons, tired evenings,
    // with a rough patch in the middle week.
    println!("📊 Generating mood history...");
    let start = Utc
        .with_ymd_and_hms(2025, 3, 3, 0, 0, 0)
        .single()
        .ok_or("bad start date")?;
    let mut moods = Vec::new();
    for day in 0..21i64 {
        let rough = (7..14).contains(&day);
        let (morning, evening) = if rough {
            (Emotion::Anxious, Emotion::Stressed)
        } else {
            (Emotion::Energetic, Emotion::Tired)
        };
        let base = if rough { 4 } else { 7 };
        moods.push(MoodRecord::new(
            morning,
            base + 1,
            start + Duration::days(day) + Duration::hours(8),
        ));
        moods.push(MoodRecord::new(
            Emotion::Calm,
            base,
            start + Duration::days(day) + Duration::hours(13),
        ));
        moods.push(MoodRecord::new(
            evening,
            base - 2,
            start + Duration::days(day) + Duration::hours(20),
        ));
    }
    println!("  Mood records: {}", moods.len());

    let sessions: Vec<WellnessSessionRecord> = (0..12)
        .map(|day| WellnessSessionRecord {
            kind: SessionKind::Meditation,
            category: "mindfulness".to_string(),
            mood_before: Some(MoodMeasure::Intensity(4)),
            mood_after: Some(MoodMeasure::Intensity(6)),
            completed_at: start + Duration::days(day) + Duration::hours(7),
        })
        .collect();
    println!("  Wellness sessions: {}", sessions.len());
    println!();

    // Train
    println!("🎓 Training...\n");
    let mut engine = InsightEngine::new(config);
    let history = engine.train_models(&moods);

    for (epoch, (loss, acc)) in history
        .losses
        .iter()
        .zip(history.accuracies.iter())
        .enumerate()
        .step_by(10)
    {
        println!(
            "Epoch {:3} | Loss: {:.4} | Accuracy: {:.2}%",
            epoch,
            loss,
            acc * 100.0
        );
    }
    println!(
        "\n✅ Training complete: final loss {:.4}, accuracy {:.2}%",
        history.final_loss(),
        history.final_accuracy() * 100.0
    );
    println!(
        "  Model trained on {} sliding-window pairs",
        engine.model_state().data_points_processed
    );
    println!();

    // Forecast
    println!("🔮 Forecast:");
    let forecast = engine.predict_moods(&moods, None);
    for day in &forecast.daily {
        println!(
            "  {} | {:10} | intensity {:2} | confidence {:.2}",
            day.date.format("%Y-%m-%d"),
            day.emotion.label(),
            day.intensity,
            day.confidence
        );
    }
    println!("  Trend: {:?} ({:.2} confidence)", forecast.trend, forecast.confidence);
    for factor in &forecast.factors {
        println!("  Factor: {} ({:+.2})", factor.name, factor.influence);
    }
    println!();

    // Patterns
    println!("🔍 Detected patterns:");
    let report = engine.detect_patterns(&moods, &sessions);
    for pattern in &report.patterns {
        println!(
            "  [{:?}] {} (strength {:.2})",
            pattern.kind, pattern.description, pattern.strength
        );
    }
    for insight in &report.insights {
        println!("  Insight: {} - {}", insight.title, insight.description);
    }
    println!();

    // Recommendations
    println!("🎯 Recommendations:");
    let catalogs = ContentCatalogs {
        meditation: vec![
            ContentItem::new("Calm the Storm", "anxiety"),
            ContentItem::new("Body Scan", "mindfulness"),
            ContentItem::new("Drift Off", "sleep"),
        ],
        yoga: vec![
            ContentItem::new("Quiet Evening", "yin"),
            ContentItem::new("Soft Morning", "gentle"),
        ],
        music: vec![
            ContentItem::new("Still Water", "calm"),
            ContentItem::new("Night Rain", "ambient"),
        ],
    };
    let set = engine.generate_recommendations(&moods, &sessions, &catalogs, 5);
    for rec in &set.recommendations {
        println!(
            "  {:.2} [{:?}] {} ({}) - {}",
            rec.score,
            rec.urgency,
            rec.title,
            rec.session_type.label(),
            rec.predicted_effect
        );
    }
    for tip in &set.personalized_tips {
        println!("  Tip: {}", tip);
    }
    for slot in &set.optimal_schedule {
        println!(
            "  Best hour: {:02}:00 → {} ({:.0}% of sessions)",
            slot.hour,
            slot.activity,
            slot.confidence * 100.0
        );
    }
    println!();

    // Sentiment
    println!("📝 Sentiment:");
    let text = "Felt anxious and overwhelmed this morning, but a walk left me calm and grateful.";
    let sentiment = engine.analyze_sentiment(text);
    println!("  \"{}\"", text);
    println!("  Overall score: {:+.2}", sentiment.overall_score);
    for signal in &sentiment.emotions {
        println!("  Signal: {} ({:?})", signal.emotion, signal.intensity);
    }
    println!();

    // Export round-trip
    println!("💾 Export/import round-trip...");
    let json = engine.export_model().to_json()?;
    println!("  Snapshot size: {} bytes", json.len());
    let mut fresh = InsightEngine::default();
    fresh.import_model(&mood_insight_core::ModelSnapshot::from_json(&json)?)?;
    println!(
        "  Restored model trained: {}",
        fresh.model_state().is_trained
    );

    println!("\n✨ Done!");
    Ok(())
}
