//! Run the scoring pipeline against a live generation endpoint.
//!
//! ```bash
//! WELLNESS_API_BASE_URL=http://127.0.0.1:11434/api cargo run --example run_pipeline
//! ```

use std::sync::Arc;

use wellness_core::config::Config;
use wellness_core::http_client::ReqwestTextGenerator;
use wellness_core::{HealthProfile, Pipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let generator = ReqwestTextGenerator::from_config(&config);
    let pipeline =
        Pipeline::new(Arc::new(generator)).with_generation_timeout(config.generation_timeout);

    let profile = HealthProfile {
        age: Some("26-35".into()),
        goals: Some(vec!["better sleep".into(), "stress management".into()]),
        avg_sleep: Some("5-6 hours".into()),
        avg_water: Some("1.5-2L".into()),
        avg_steps: Some("5000-8000".into()),
        exercise_frequency: Some("2 times per week".into()),
        avg_mood: Some("5-6 (neutral)".into()),
        avg_stress: Some("7-8 (high)".into()),
        nutrition_score: Some("fair (41-60)".into()),
        symptoms: Some(vec!["fatigue".into(), "insomnia".into()]),
        ..Default::default()
    };

    let report = pipeline.run(profile).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
