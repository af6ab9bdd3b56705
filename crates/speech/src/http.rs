use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use saarthi_core::Language;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{AudioClip, SpeechError, SpeechSynthesizer, SynthesizedAudio, Transcriber, Transcript};

const DEFAULT_AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

#[derive(Debug, Clone)]
pub struct HttpSpeechConfig {
    /// Base URL of the sidecar, e.g. `http://127.0.0.1:8090`.
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpSpeechConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(20),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn client(&self) -> Result<Client, SpeechError> {
        Ok(Client::builder()
            .connect_timeout(Duration::from_secs(6))
            .timeout(self.timeout)
            .build()?)
    }
}

#[derive(Debug, Deserialize)]
struct TranscribeResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    error: Option<String>,
}

/// Sends the raw upload to `{base}/transcribe` with the recognizer locale in
/// `x-language`. Format conversion is the sidecar's job.
#[derive(Debug, Clone)]
pub struct HttpTranscriber {
    client: Client,
    endpoint: String,
}

impl HttpTranscriber {
    pub fn new(config: &HttpSpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            client: config.client()?,
            endpoint: config.endpoint("transcribe"),
        })
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn transcribe(
        &self,
        audio: AudioClip,
        language: Language,
    ) -> Result<Transcript, SpeechError> {
        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        debug!(
            bytes = audio.bytes.len(),
            content_type = %audio.content_type,
            file_name = audio.file_name.as_deref().unwrap_or("-"),
            locale = language.speech_locale(),
            "sending audio to transcription service"
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, audio.content_type.as_str())
            .header("x-language", language.speech_locale());
        // Lets the sidecar pick a decoder by extension when content-type is generic.
        if let Some(file_name) = audio.file_name.as_deref() {
            request = request.header("x-file-name", file_name);
        }
        let response = request.body(audio.bytes).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status {
                service: "transcription",
                status: status.as_u16(),
            });
        }

        let body: TranscribeResponse = response
            .json()
            .await
            .map_err(|err| SpeechError::Decode(err.to_string()))?;

        match body.error {
            Some(error) if error == "unrecognized" => Ok(Transcript::Unrecognized),
            Some(error) => {
                warn!(error = %error, "transcription service reported an error");
                Err(SpeechError::Service {
                    service: "transcription",
                    message: error,
                })
            }
            None if body.text.trim().is_empty() => Ok(Transcript::Unrecognized),
            None => Ok(Transcript::Recognized(body.text.trim().to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    language: &'static str,
}

/// Posts `{ text, language }` to `{base}/synthesize`; the body of a
/// successful response is the audio.
#[derive(Debug, Clone)]
pub struct HttpSynthesizer {
    client: Client,
    endpoint: String,
}

impl HttpSynthesizer {
    pub fn new(config: &HttpSpeechConfig) -> Result<Self, SpeechError> {
        Ok(Self {
            client: config.client()?,
            endpoint: config.endpoint("synthesize"),
        })
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSynthesizer {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SynthesizedAudio, SpeechError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SynthesizeRequest {
                text,
                language: language.as_code(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::Status {
                service: "synthesis",
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or(DEFAULT_AUDIO_CONTENT_TYPE)
            .to_string();
        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(SpeechError::Decode(
                "synthesis service returned no audio".to_string(),
            ));
        }

        Ok(SynthesizedAudio {
            bytes,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    async fn spawn(router: Router) -> HttpSpeechConfig {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        HttpSpeechConfig::new(format!("http://{addr}/"))
    }

    async fn fake_transcribe(headers: HeaderMap, body: Bytes) -> Json<Value> {
        let locale = headers
            .get("x-language")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        match body.as_ref() {
            b"silence" => Json(json!({ "text": "", "error": "unrecognized" })),
            b"quiet" => Json(json!({ "text": "   " })),
            b"broken" => Json(json!({ "text": "", "error": "decoder crashed" })),
            b"named" => Json(json!({
                "text": headers
                    .get("x-file-name")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("unnamed")
            })),
            other => Json(json!({
                "text": format!("{} {}", locale, String::from_utf8_lossy(other))
            })),
        }
    }

    async fn fake_synthesize(Json(body): Json<Value>) -> (StatusCode, Vec<u8>) {
        let text = body["text"].as_str().unwrap_or_default();
        if text.is_empty() {
            return (StatusCode::BAD_REQUEST, Vec::new());
        }
        let language = body["language"].as_str().unwrap_or_default();
        (StatusCode::OK, format!("mp3:{language}:{text}").into_bytes())
    }

    fn sidecar() -> Router {
        Router::new()
            .route("/transcribe", post(fake_transcribe))
            .route("/synthesize", post(fake_synthesize))
    }

    #[tokio::test]
    async fn transcribes_with_speech_locale_header() {
        let config = spawn(sidecar()).await;
        let transcriber = HttpTranscriber::new(&config).unwrap();

        let transcript = transcriber
            .transcribe(AudioClip::new(b"bukhar".to_vec(), "audio/webm"), Language::Hi)
            .await
            .unwrap();

        assert_eq!(transcript, Transcript::Recognized("hi-IN bukhar".to_string()));
    }

    #[tokio::test]
    async fn forwards_upload_file_name() {
        let config = spawn(sidecar()).await;
        let transcriber = HttpTranscriber::new(&config).unwrap();

        let mut clip = AudioClip::new(b"named".to_vec(), "application/octet-stream");
        let transcript = transcriber
            .transcribe(clip.clone(), Language::En)
            .await
            .unwrap();
        assert_eq!(transcript, Transcript::Recognized("unnamed".to_string()));

        clip.file_name = Some("recording.webm".to_string());
        let transcript = transcriber.transcribe(clip, Language::En).await.unwrap();
        assert_eq!(transcript, Transcript::Recognized("recording.webm".to_string()));
    }

    #[tokio::test]
    async fn unrecognized_and_blank_results_map_to_unrecognized() {
        let config = spawn(sidecar()).await;
        let transcriber = HttpTranscriber::new(&config).unwrap();

        for payload in [b"silence".to_vec(), b"quiet".to_vec()] {
            let transcript = transcriber
                .transcribe(AudioClip::new(payload, "audio/wav"), Language::En)
                .await
                .unwrap();
            assert_eq!(transcript, Transcript::Unrecognized);
        }
    }

    #[tokio::test]
    async fn service_errors_and_empty_audio_are_errors() {
        let config = spawn(sidecar()).await;
        let transcriber = HttpTranscriber::new(&config).unwrap();

        let err = transcriber
            .transcribe(AudioClip::new(b"broken".to_vec(), "audio/wav"), Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::Service { .. }));

        let err = transcriber
            .transcribe(AudioClip::new(Vec::new(), "audio/wav"), Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::EmptyAudio));
    }

    #[tokio::test]
    async fn synthesizes_audio_bytes() {
        let config = spawn(sidecar()).await;
        let synthesizer = HttpSynthesizer::new(&config).unwrap();

        let audio = synthesizer.synthesize("namaste", Language::Te).await.unwrap();
        assert_eq!(audio.bytes, b"mp3:te:namaste".to_vec());
    }

    #[tokio::test]
    async fn synthesis_http_failure_is_reported() {
        let config = spawn(sidecar()).await;
        let synthesizer = HttpSynthesizer::new(&config).unwrap();

        let err = synthesizer.synthesize("", Language::En).await.unwrap_err();
        assert!(matches!(
            err,
            SpeechError::Status {
                service: "synthesis",
                status: 400
            }
        ));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transcriber =
            HttpTranscriber::new(&HttpSpeechConfig::new(format!("http://{addr}"))).unwrap();
        let err = transcriber
            .transcribe(AudioClip::new(b"hello".to_vec(), "audio/wav"), Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, SpeechError::Request(_)));
    }
}
