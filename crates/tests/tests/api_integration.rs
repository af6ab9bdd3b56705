use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use saarthi_api::{build_router, ApiState, ServiceConfig};
use saarthi_assistant::Assistant;
use saarthi_core::{GuidanceEngine, Language};
use saarthi_observability::AppMetrics;
use saarthi_speech::{
    AudioClip, SpeechError, SpeechSynthesizer, SynthesizedAudio, Transcriber, Transcript,
    UNRECOGNIZED_MESSAGE,
};
use serde_json::Value;
use tower::ServiceExt;

const BOUNDARY: &str = "saarthi-test-boundary";

/// Treats the uploaded bytes as the spoken words; `...` is silence.
struct ScriptedTranscriber;

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn transcribe(
        &self,
        audio: AudioClip,
        _language: Language,
    ) -> Result<Transcript, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }
        if audio.bytes == b"..." {
            return Ok(Transcript::Unrecognized);
        }
        if audio.bytes == b"whoami" {
            return Ok(Transcript::Recognized(
                audio.file_name.unwrap_or_else(|| "unnamed".to_string()),
            ));
        }
        if audio.bytes == b"offline" {
            return Err(SpeechError::Status {
                service: "transcription",
                status: 500,
            });
        }
        Ok(Transcript::Recognized(
            String::from_utf8_lossy(&audio.bytes).into_owned(),
        ))
    }
}

struct TaggedSynthesizer;

#[async_trait]
impl SpeechSynthesizer for TaggedSynthesizer {
    fn name(&self) -> &'static str {
        "tagged"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedAudio, SpeechError> {
        let mut bytes = format!("{}:", language.as_code()).into_bytes();
        bytes.extend_from_slice(text.as_bytes());
        Ok(SynthesizedAudio {
            bytes,
            content_type: "audio/mpeg".to_string(),
        })
    }
}

fn app_with(config: &ServiceConfig, speech: bool) -> Router {
    let mut assistant = Assistant::new(GuidanceEngine::default(), AppMetrics::shared());
    if speech {
        assistant = assistant
            .with_transcriber(Arc::new(ScriptedTranscriber))
            .with_synthesizer(Arc::new(TaggedSynthesizer));
    }
    build_router(ApiState::new(assistant, config))
}

fn app() -> Router {
    app_with(&ServiceConfig::default(), true)
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a [u8]),
}

fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"clip.wav\"\r\n\
                         Content-Type: audio/wav\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_reports_capabilities() {
    let response = app_with(&ServiceConfig::default(), false)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");

    let parsed = json_body(response).await;
    assert_eq!(parsed["status"], "healthy");
    assert_eq!(parsed["service"], "saarthi");
    assert_eq!(parsed["capabilities"]["transcription"], false);
    assert_eq!(parsed["capabilities"]["synthesis"], false);
}

#[tokio::test]
async fn guidance_from_urlencoded_form() {
    let response = app()
        .oneshot(form_request(
            "/get-guidance",
            "text=I+have+a+fever+and+headache&language=en",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["text"], "I have a fever and headache");
    assert_eq!(parsed["intent"], "health");
    assert_eq!(parsed["topic"], "fever");
    assert_eq!(parsed["language"], "en");
    assert!(parsed["guidance"]
        .as_str()
        .unwrap()
        .starts_with("FEVER - Comprehensive First Aid Guide:"));
}

#[tokio::test]
async fn guidance_from_multipart_form_in_hindi() {
    let response = app()
        .oneshot(multipart_request(
            "/get-guidance",
            &[
                Part::Text("text", "बाढ़ का पानी बढ़ रहा है"),
                Part::Text("language", "hi"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["intent"], "climate");
    assert_eq!(parsed["topic"], "flood");
    assert!(parsed["guidance"]
        .as_str()
        .unwrap()
        .starts_with("बाढ़ से सुरक्षा:"));
}

#[tokio::test]
async fn language_defaults_to_english() {
    let response = app()
        .oneshot(form_request("/get-guidance", "text=hello"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["intent"], "general");
    assert_eq!(parsed["topic"], Value::Null);
    assert_eq!(parsed["language"], "en");
    assert!(parsed["guidance"]
        .as_str()
        .unwrap()
        .starts_with("Hello! I am Saarthi AI"));
}

#[tokio::test]
async fn unsupported_language_is_rejected() {
    let response = app()
        .oneshot(form_request("/get-guidance", "text=fever&language=ta"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let parsed = json_body(response).await;
    assert_eq!(parsed["error"], "unsupported_language");
    assert_eq!(parsed["message"], "Unsupported language");
}

#[tokio::test]
async fn missing_text_is_rejected() {
    let response = app()
        .oneshot(form_request("/get-guidance", "language=te"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "missing_field");
}

#[tokio::test]
async fn respond_streams_audio_with_intent_header() {
    let response = app()
        .oneshot(form_request(
            "/respond",
            "text=how+to+apply+for+ration+card&language=te",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers["content-type"], "audio/mpeg");
    assert_eq!(
        headers["content-disposition"],
        "attachment; filename=response.mp3"
    );
    assert_eq!(headers["x-intent"], "schemes");

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"te:"));
}

#[tokio::test]
async fn respond_without_synthesizer_is_unavailable() {
    let response = app_with(&ServiceConfig::default(), false)
        .oneshot(form_request("/respond", "text=fever"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(response).await["error"], "speech_unavailable");
}

#[tokio::test]
async fn transcribe_returns_recognized_text() {
    let response = app()
        .oneshot(multipart_request(
            "/transcribe",
            &[
                Part::Text("language", "en"),
                Part::File("audio", b"there is a flood near my village"),
            ],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["success"], true);
    assert_eq!(parsed["recognized"], true);
    assert_eq!(parsed["text"], "there is a flood near my village");
}

#[tokio::test]
async fn upload_file_name_reaches_the_transcriber() {
    let response = app()
        .oneshot(multipart_request(
            "/transcribe",
            &[Part::File("audio", b"whoami")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["text"], "clip.wav");
}

#[tokio::test]
async fn unrecognized_audio_returns_apology_text() {
    let response = app()
        .oneshot(multipart_request(
            "/transcribe",
            &[Part::File("audio", b"...")],
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let parsed = json_body(response).await;
    assert_eq!(parsed["recognized"], false);
    assert_eq!(parsed["text"], UNRECOGNIZED_MESSAGE);
    assert_eq!(parsed["language"], "en");
}

#[tokio::test]
async fn transcribe_error_mapping() {
    let missing = app()
        .oneshot(multipart_request(
            "/transcribe",
            &[Part::Text("language", "hi")],
        ))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(missing).await["error"], "missing_field");

    let empty = app()
        .oneshot(multipart_request("/transcribe", &[Part::File("audio", b"")]))
        .await
        .unwrap();
    assert_eq!(empty.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(empty).await["error"], "empty_audio");

    let failed = app()
        .oneshot(multipart_request(
            "/transcribe",
            &[Part::File("audio", b"offline")],
        ))
        .await
        .unwrap();
    assert_eq!(failed.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(failed).await["error"], "transcription_failed");
}

#[tokio::test]
async fn rate_limit_applies_per_client_but_not_to_health() {
    let config = ServiceConfig {
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 2,
        ..ServiceConfig::default()
    };
    let app = app_with(&config, true);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(form_request("/get-guidance", "text=fever"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let limited = app
        .clone()
        .oneshot(form_request("/get-guidance", "text=fever"))
        .await
        .unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json_body(limited).await["error"], "rate_limited");

    let other_client = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/get-guidance")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("x-forwarded-for", "203.0.113.50")
                .body(Body::from("text=fever"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(other_client.status(), StatusCode::OK);

    let health = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(health.status(), StatusCode::OK);
}

#[tokio::test]
async fn language_codes_must_match_exactly() {
    for code in ["hindi", "EN", "te-IN", "english"] {
        let response = app()
            .oneshot(form_request(
                "/get-guidance",
                &format!("text=fever&language={code}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{code}");
        assert_eq!(json_body(response).await["error"], "unsupported_language");
    }
}

#[tokio::test]
async fn oversized_upload_is_payload_too_large() {
    let config = ServiceConfig {
        max_upload_bytes: 64,
        ..ServiceConfig::default()
    };
    let clip = vec![b'a'; 500];

    let response = app_with(&config, true)
        .oneshot(multipart_request("/transcribe", &[Part::File("audio", &clip)]))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json_body(response).await["error"], "payload_too_large");

    let mut declared = multipart_request("/transcribe", &[Part::File("audio", &clip)]);
    declared
        .headers_mut()
        .insert("content-length", "700".parse().unwrap());
    let response = app_with(&config, true).oneshot(declared).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn serves_the_browser_client() {
    let config = ServiceConfig {
        rate_limit_max: 1,
        ..ServiceConfig::default()
    };
    let app = app_with(&config, false);

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("/static/app.js"));
    }

    let script = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/static/app.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(script.status(), StatusCode::OK);
    let body = to_bytes(script.into_body(), usize::MAX).await.unwrap();
    let source = String::from_utf8_lossy(&body);
    for route in ["/health", "/transcribe", "/get-guidance", "/respond"] {
        assert!(source.contains(route), "client should call {route}");
    }

    let missing = app
        .oneshot(
            Request::builder()
                .uri("/static/nope.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
