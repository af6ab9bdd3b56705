use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("audio upload is empty")]
    EmptyAudio,

    #[error("speech service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{service} service returned HTTP {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{service} service reported: {message}")]
    Service {
        service: &'static str,
        message: String,
    },

    #[error("could not decode speech service response: {0}")]
    Decode(String),
}
