use futures_util::StreamExt;
use wellness_core::http_client::ReqwestTextGenerator;
use wellness_core::{ChatMessage, TextGenerator, WellnessError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ndjson(frames: &[&str]) -> String {
    let mut body = frames.join("\n");
    body.push('\n');
    body
}

async fn collect(generator: &ReqwestTextGenerator) -> Result<String, WellnessError> {
    let mut stream = generator
        .stream_text(vec![ChatMessage::user("hello")])
        .await?;
    let mut text = String::new();
    while let Some(chunk) = stream.next().await {
        text.push_str(&chunk?);
    }
    Ok(text)
}

#[tokio::test]
async fn concatenates_streamed_frames() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            ndjson(&[
                r#"{"message":{"role":"assistant","content":"Improve "},"done":false}"#,
                r#"{"message":{"role":"assistant","content":"your sleep"},"done":false}"#,
                r#"{"message":{"role":"assistant","content":"."},"done":true}"#,
            ]),
            "application/x-ndjson",
        ))
        .mount(&mock_server)
        .await;

    let generator =
        ReqwestTextGenerator::new(&format!("{}/api", mock_server.uri()), "test-model", None);
    let text = collect(&generator).await.expect("narrative");
    assert_eq!(text, "Improve your sleep.");
}

#[tokio::test]
async fn frames_split_across_chunks_still_parse() {
    // A single body delivered without a trailing newline on the last frame
    let mock_server = MockServer::start().await;
    let body = format!(
        "{}\n{}",
        r#"{"message":{"content":"part one "},"done":false}"#,
        r#"{"message":{"content":"part two"},"done":true}"#
    );
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/x-ndjson"))
        .mount(&mock_server)
        .await;

    let generator =
        ReqwestTextGenerator::new(&format!("{}/api", mock_server.uri()), "test-model", None);
    let text = collect(&generator).await.expect("narrative");
    assert_eq!(text, "part one part two");
}

#[tokio::test]
async fn error_status_maps_to_service_unavailable() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503).set_body_string("model loading"))
        .mount(&mock_server)
        .await;

    let generator =
        ReqwestTextGenerator::new(&format!("{}/api", mock_server.uri()), "test-model", None);
    let err = collect(&generator).await.unwrap_err();
    assert!(matches!(err, WellnessError::ServiceUnavailable(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn mid_stream_error_frame_surfaces() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            ndjson(&[
                r#"{"message":{"content":"partial"},"done":false}"#,
                r#"{"error":"model crashed"}"#,
            ]),
            "application/x-ndjson",
        ))
        .mount(&mock_server)
        .await;

    let generator =
        ReqwestTextGenerator::new(&format!("{}/api", mock_server.uri()), "test-model", None);
    let err = collect(&generator).await.unwrap_err();
    assert!(matches!(err, WellnessError::ServiceUnavailable(msg) if msg == "model crashed"));
}

#[tokio::test]
async fn malformed_frame_is_invalid_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("not json\n", "application/x-ndjson"),
        )
        .mount(&mock_server)
        .await;

    let generator =
        ReqwestTextGenerator::new(&format!("{}/api", mock_server.uri()), "test-model", None);
    let err = collect(&generator).await.unwrap_err();
    assert!(matches!(err, WellnessError::InvalidResponse(_)));
}
