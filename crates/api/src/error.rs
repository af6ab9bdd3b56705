use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use saarthi_assistant::AssistantError;
use saarthi_speech::SpeechError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unsupported language")]
    UnsupportedLanguage(String),

    #[error("missing form field `{0}`")]
    MissingField(&'static str),

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("request body exceeds the upload limit")]
    PayloadTooLarge,

    #[error("audio upload is empty")]
    EmptyAudio,

    #[error("{0} service is not configured")]
    SpeechUnavailable(&'static str),

    #[error("{stage} failed: {source}")]
    SpeechFailed {
        stage: &'static str,
        #[source]
        source: SpeechError,
    },
}

impl ApiError {
    pub fn speech(stage: &'static str, err: AssistantError) -> Self {
        match err {
            AssistantError::SpeechUnavailable(service) => Self::SpeechUnavailable(service),
            AssistantError::Speech(SpeechError::EmptyAudio) => Self::EmptyAudio,
            AssistantError::Speech(source) => Self::SpeechFailed { stage, source },
        }
    }

    /// Maps an extractor rejection; the body limit surfaces here as 413.
    pub fn body(status: StatusCode, text: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::InvalidBody(text)
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedLanguage(_)
            | Self::MissingField(_)
            | Self::InvalidBody(_)
            | Self::EmptyAudio => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::SpeechUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::SpeechFailed { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage(_) => "unsupported_language",
            Self::MissingField(_) => "missing_field",
            Self::InvalidBody(_) => "invalid_body",
            Self::PayloadTooLarge => "payload_too_large",
            Self::EmptyAudio => "empty_audio",
            Self::SpeechUnavailable(_) => "speech_unavailable",
            Self::SpeechFailed {
                stage: "transcription",
                ..
            } => "transcription_failed",
            Self::SpeechFailed { .. } => "synthesis_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (
            status,
            Json(serde_json::json!({
                "error": self.code(),
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}
