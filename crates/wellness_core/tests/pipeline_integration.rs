use std::sync::Arc;
use std::time::Duration;

use wellness_core::http_client::ReqwestTextGenerator;
use wellness_core::{HealthProfile, Pipeline, WellnessError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn healthy_profile() -> HealthProfile {
    HealthProfile {
        age: Some("26-35".into()),
        goals: Some(vec!["general health".into()]),
        avg_sleep: Some("7-8 hours".into()),
        avg_water: Some("2.5-3L".into()),
        avg_steps: Some("10000-12000".into()),
        exercise_frequency: Some("5+ times per week".into()),
        avg_mood: Some("7-8 (good)".into()),
        avg_stress: Some("1-2 (very low)".into()),
        nutrition_score: Some("excellent (81-100)".into()),
        ..Default::default()
    }
}

fn pipeline_for(mock_server: &MockServer) -> Pipeline {
    let generator = ReqwestTextGenerator::new(
        &format!("{}/api", mock_server.uri()),
        "test-model",
        None,
    );
    Pipeline::new(Arc::new(generator))
}

#[tokio::test]
async fn full_pipeline_produces_final_report() {
    let mock_server = MockServer::start().await;
    // Narrative arrives with control characters the sanitizer must drop
    // and surrounding whitespace it must trim.
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            concat!(
                r#"{"message":{"content":"  Keep up the good work"},"done":false}"#,
                "\n",
                r#"{"message":{"content":" across all areas.  "},"done":true}"#,
                "\n",
            ),
            "application/x-ndjson",
        ))
        .mount(&mock_server)
        .await;

    let report = pipeline_for(&mock_server)
        .run(healthy_profile())
        .await
        .expect("report");

    assert_eq!(report.overall_score, 86);
    assert_eq!(report.analysis, "Keep up the good work across all areas.");
    assert_eq!(
        report.health_alerts,
        vec!["No immediate health alerts identified"]
    );
    assert_eq!(report.strengths.len(), 3);
    assert_eq!(report.immediate_actions.len(), 3);
    assert_eq!(report.tracking_suggestions.len(), 3);
}

#[tokio::test]
async fn unreachable_endpoint_surfaces_service_unavailable() {
    // Nothing listening on this port
    let generator = ReqwestTextGenerator::new("http://127.0.0.1:1/api", "test-model", None);
    let pipeline = Pipeline::new(Arc::new(generator));
    let err = pipeline.run(HealthProfile::default()).await.unwrap_err();
    assert!(matches!(err, WellnessError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn stalled_stream_times_out_as_service_unavailable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(
                    r#"{"message":{"content":"never finishes"},"done":false}"#,
                    "application/x-ndjson",
                )
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let report = pipeline_for(&mock_server)
        .with_generation_timeout(Duration::from_millis(200))
        .run(HealthProfile::default())
        .await;
    assert!(matches!(report, Err(WellnessError::ServiceUnavailable(_))));
}
