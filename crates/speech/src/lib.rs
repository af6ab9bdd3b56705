//! Speech collaborators around the guidance engine.
//!
//! Recognition and synthesis run in external services; this crate only
//! defines the boundary and an HTTP client for each side.

mod error;
mod http;

use async_trait::async_trait;
use saarthi_core::Language;

pub use error::SpeechError;
pub use http::{HttpSpeechConfig, HttpSynthesizer, HttpTranscriber};

/// Text handed back to the user when the recognizer heard nothing usable.
pub const UNRECOGNIZED_MESSAGE: &str = "Sorry, I could not understand the audio.";

/// An uploaded recording, passed through to the recognizer as-is.
#[derive(Debug, Clone)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: Option<String>,
}

impl AudioClip {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
            file_name: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Recognized(String),
    Unrecognized,
}

impl Transcript {
    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Recognized(_))
    }

    /// The failure case becomes an apology string; downstream it is treated
    /// like any other query text.
    pub fn into_text(self) -> String {
        match self {
            Self::Recognized(text) => text,
            Self::Unrecognized => UNRECOGNIZED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    fn name(&self) -> &'static str;

    async fn transcribe(
        &self,
        audio: AudioClip,
        language: Language,
    ) -> Result<Transcript, SpeechError>;
}

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedAudio, SpeechError>;
}
