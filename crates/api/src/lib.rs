mod config;
mod error;
mod form;
mod rate_limit;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{ConnectInfo, DefaultBodyLimit, Json, State};
use axum::http::{header, HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use saarthi_assistant::Assistant;
use saarthi_core::{GuidanceEngine, Intent, Language, SubTopic};
use saarthi_observability::AppMetrics;
use saarthi_speech::{HttpSpeechConfig, HttpSynthesizer, HttpTranscriber};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use crate::config::ServiceConfig;
pub use crate::error::ApiError;
pub use crate::form::{AudioUpload, QueryFields};
pub use crate::rate_limit::IpRateLimiter;

const SERVICE_NAME: &str = "saarthi";
const X_INTENT: &str = "x-intent";
const RESPONSE_AUDIO_DISPOSITION: &str = "attachment; filename=response.mp3";

#[derive(Clone)]
pub struct ApiState {
    pub assistant: Arc<Assistant>,
    pub limiter: IpRateLimiter,
    pub allowed_origins: Arc<Vec<String>>,
    pub max_upload_bytes: usize,
    pub web_root: Arc<PathBuf>,
}

impl ApiState {
    pub fn new(assistant: Assistant, config: &ServiceConfig) -> Self {
        Self {
            assistant: Arc::new(assistant),
            limiter: IpRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
            allowed_origins: Arc::new(config.allowed_origins.clone()),
            max_upload_bytes: config.max_upload_bytes,
            web_root: Arc::new(config.web_root.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    timestamp_utc: String,
    metrics: saarthi_observability::MetricsSnapshot,
    capabilities: HealthCapabilities,
}

#[derive(Debug, Serialize)]
struct HealthCapabilities {
    transcription: bool,
    synthesis: bool,
}

#[derive(Debug, Serialize)]
struct TranscribeResponse {
    success: bool,
    text: String,
    recognized: bool,
    language: Language,
}

#[derive(Debug, Serialize)]
struct GuidanceResponse {
    success: bool,
    text: String,
    intent: Intent,
    topic: Option<SubTopic>,
    guidance: &'static str,
    language: Language,
}

/// Wires the assistant with HTTP speech clients for whichever sidecar URLs
/// are configured. Without them the speech routes answer 503.
pub fn build_app(config: &ServiceConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let mut assistant = Assistant::new(GuidanceEngine::default(), metrics);

    if let Some(url) = config.stt_url.as_ref() {
        let speech_config = HttpSpeechConfig {
            base_url: url.clone(),
            timeout: config.speech_timeout,
        };
        let transcriber = HttpTranscriber::new(&speech_config)
            .context("failed to build transcription client")?;
        assistant = assistant.with_transcriber(Arc::new(transcriber));
    }

    if let Some(url) = config.tts_url.as_ref() {
        let speech_config = HttpSpeechConfig {
            base_url: url.clone(),
            timeout: config.speech_timeout,
        };
        let synthesizer =
            HttpSynthesizer::new(&speech_config).context("failed to build synthesis client")?;
        assistant = assistant.with_synthesizer(Arc::new(synthesizer));
    }

    Ok(build_router(ApiState::new(assistant, config)))
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(state.web_root.join("index.html")))
        .nest_service("/static", ServeDir::new(state.web_root.join("static")))
        .route("/health", get(health))
        .route("/transcribe", post(transcribe))
        .route("/get-guidance", post(get_guidance))
        .route("/respond", post(respond))
        .layer(build_cors_layer(&state.allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(state.max_upload_bytes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.assistant.metrics().snapshot(),
        capabilities: HealthCapabilities {
            transcription: state.assistant.can_transcribe(),
            synthesis: state.assistant.can_synthesize(),
        },
    };
    (StatusCode::OK, Json(payload))
}

async fn transcribe(
    State(state): State<ApiState>,
    upload: AudioUpload,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let reply = state
        .assistant
        .transcribe(upload.audio, upload.language)
        .await
        .map_err(|err| ApiError::speech("transcription", err))?;

    Ok(Json(TranscribeResponse {
        success: true,
        text: reply.text,
        recognized: reply.recognized,
        language: reply.language,
    }))
}

async fn get_guidance(
    State(state): State<ApiState>,
    fields: QueryFields,
) -> Result<Json<GuidanceResponse>, ApiError> {
    let (text, language) = fields.into_query()?;
    let outcome = state.assistant.answer(&text, language);

    Ok(Json(GuidanceResponse {
        success: true,
        text,
        intent: outcome.intent,
        topic: outcome.topic,
        guidance: outcome.guidance,
        language: outcome.language,
    }))
}

async fn respond(
    State(state): State<ApiState>,
    fields: QueryFields,
) -> Result<Response, ApiError> {
    let (text, language) = fields.into_query()?;
    let spoken = state
        .assistant
        .answer_with_audio(&text, language)
        .await
        .map_err(|err| ApiError::speech("synthesis", err))?;

    let content_type = HeaderValue::from_str(&spoken.audio.content_type)
        .unwrap_or_else(|_| HeaderValue::from_static("audio/mpeg"));
    let mut response = (StatusCode::OK, spoken.audio.bytes).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static(RESPONSE_AUDIO_DISPOSITION),
    );
    headers.insert(
        X_INTENT,
        HeaderValue::from_static(spoken.outcome.intent.as_str()),
    );
    Ok(response)
}

fn build_cors_layer(allowed_origins: &Arc<Vec<String>>) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<_>>();
    let origins = if origins.is_empty() {
        vec![HeaderValue::from_static("http://localhost:5000")]
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([
            HeaderName::from_static(X_INTENT),
            header::CONTENT_DISPOSITION,
        ])
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request);
    if !state.limiter.allow(&ip) {
        tracing::warn!(ip = %ip, "rate limit exceeded");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({
                "error": "rate_limited",
                "message": "rate limit exceeded for this IP"
            })),
        )
            .into_response();
    }

    next.run(request).await
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("no-referrer"),
    );
    response
}

fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/" | "/health") || path.starts_with("/static/")
}

fn request_ip(request: &Request<Body>) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return forwarded.to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(forwarded: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/get-guidance");
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn request_ip_prefers_first_forwarded_address() {
        let request = request_with(Some("203.0.113.9, 10.0.0.1"));
        assert_eq!(request_ip(&request), "203.0.113.9");
    }

    #[test]
    fn request_ip_uses_peer_address_then_local() {
        let mut request = request_with(None);
        assert_eq!(request_ip(&request), "local");

        let peer: SocketAddr = "198.51.100.7:41000".parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));
        assert_eq!(request_ip(&request), "198.51.100.7");
    }

    #[test]
    fn health_and_web_client_skip_rate_limiting() {
        assert!(is_public_endpoint("/health"));
        assert!(is_public_endpoint("/"));
        assert!(is_public_endpoint("/static/app.js"));
        assert!(!is_public_endpoint("/get-guidance"));
        assert!(!is_public_endpoint("/staticky"));
    }
}
