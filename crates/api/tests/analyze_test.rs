use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use moodline_analysis::classifier::SentimentClassifier;
use moodline_analysis::{AnalysisContext, AnalysisResult};
use moodline_api::{build_router, ApiConfig};
use moodline_core::types::DecisionPolicy;
use std::sync::Arc;
use tower::util::ServiceExt;

const BOUNDARY: &str = "moodline-test-boundary";

/// Keyword stub standing in for the trained model.
struct KeywordClassifier {
    classes: Vec<String>,
}

impl KeywordClassifier {
    fn new() -> Self {
        Self {
            classes: vec![
                "Positive".to_string(),
                "Neutral".to_string(),
                "Negative".to_string(),
            ],
        }
    }
}

impl SentimentClassifier for KeywordClassifier {
    fn predict_proba(&self, texts: &[String]) -> AnalysisResult<Vec<Vec<f64>>> {
        Ok(texts
            .iter()
            .map(|text| {
                if text.contains("love") {
                    vec![0.8, 0.15, 0.05]
                } else if text.contains("hate") {
                    vec![0.05, 0.15, 0.8]
                } else {
                    vec![0.2, 0.6, 0.2]
                }
            })
            .collect())
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

fn test_router() -> axum::Router {
    let context = Arc::new(AnalysisContext::new(
        Arc::new(KeywordClassifier::new()),
        DecisionPolicy::Threshold,
    ));
    build_router(context, &ApiConfig::default())
}

fn multipart_upload(field: &str, content: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"chat.txt\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {content}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_check_responds_ok() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_returns_a_chat_report() {
    let transcript = "\
1/2/24, 09:00 - Messages and calls are end-to-end encrypted. Tap to learn more.\n\
1/2/24, 09:01 - Ana: I love this plan\n\
1/2/24, 09:02 - Ben: I hate waiting so long\n\
1/2/24, 09:03 - Ana: see you at the station\n";

    let response = test_router()
        .oneshot(multipart_upload("file", transcript))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["total_messages"], 3);
    assert_eq!(json["sentiment_counts"]["Positive"], 1);
    assert_eq!(json["sentiment_counts"]["Negative"], 1);
    assert_eq!(json["overall_mood"], "Positive");
    assert_eq!(json["top_negative_messages"].as_array().map(Vec::len), Some(1));
    assert!(json["health_score"].is_u64());
}

#[tokio::test]
async fn transcript_without_messages_yields_structured_400() {
    let response = test_router()
        .oneshot(multipart_upload("file", "nothing that parses here"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"]
        .as_str()
        .expect("error message")
        .contains("No valid chat messages found"));
}

#[tokio::test]
async fn missing_file_field_yields_400() {
    let response = test_router()
        .oneshot(multipart_upload("wrong_field", "1/2/24, 09:01 - Ana: hi there"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["code"], 400);
}
