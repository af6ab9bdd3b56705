use std::sync::Arc;
use std::time::Instant;

use saarthi_core::{GuidanceEngine, Language, QueryOutcome};
use saarthi_observability::AppMetrics;
use saarthi_speech::{
    AudioClip, SpeechError, SpeechSynthesizer, SynthesizedAudio, Transcriber, Transcript,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

const LOG_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("{0} service is not configured")]
    SpeechUnavailable(&'static str),

    #[error(transparent)]
    Speech(#[from] SpeechError),
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptionReply {
    pub text: String,
    pub recognized: bool,
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct SpokenGuidance {
    pub outcome: QueryOutcome,
    pub audio: SynthesizedAudio,
}

/// Front door for every caller: runs the guidance engine and, when
/// configured, the speech services on either side of it.
#[derive(Clone)]
pub struct Assistant {
    engine: GuidanceEngine,
    transcriber: Option<Arc<dyn Transcriber>>,
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    metrics: Arc<AppMetrics>,
}

impl Assistant {
    pub fn new(engine: GuidanceEngine, metrics: Arc<AppMetrics>) -> Self {
        Self {
            engine,
            transcriber: None,
            synthesizer: None,
            metrics,
        }
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn can_transcribe(&self) -> bool {
        self.transcriber.is_some()
    }

    pub fn can_synthesize(&self) -> bool {
        self.synthesizer.is_some()
    }

    pub fn metrics(&self) -> &Arc<AppMetrics> {
        &self.metrics
    }

    #[instrument(skip(self, text), fields(language = %language))]
    pub fn answer(&self, text: &str, language: Language) -> QueryOutcome {
        let started = Instant::now();
        let outcome = self.engine.process_query(text, language);
        self.metrics.record_query(outcome.intent, started.elapsed());

        info!(
            intent = %outcome.intent,
            topic = outcome.topic.map(|topic| topic.as_str()).unwrap_or("none"),
            query = %preview(text),
            "guidance selected"
        );
        outcome
    }

    #[instrument(skip(self, text), fields(language = %language))]
    pub async fn answer_with_audio(
        &self,
        text: &str,
        language: Language,
    ) -> Result<SpokenGuidance, AssistantError> {
        let synthesizer = self
            .synthesizer
            .as_ref()
            .ok_or(AssistantError::SpeechUnavailable("synthesis"))?;

        let outcome = self.answer(text, language);
        let audio = match synthesizer.synthesize(outcome.guidance, language).await {
            Ok(audio) => audio,
            Err(err) => {
                self.metrics.inc_synthesis_failure();
                error!(error = %err, synthesizer = synthesizer.name(), "speech synthesis failed");
                return Err(err.into());
            }
        };
        self.metrics.inc_synthesis();

        info!(
            bytes = audio.bytes.len(),
            guidance = %preview(outcome.guidance),
            "generated speech"
        );
        Ok(SpokenGuidance { outcome, audio })
    }

    #[instrument(skip(self, audio), fields(language = %language, bytes = audio.bytes.len()))]
    pub async fn transcribe(
        &self,
        audio: AudioClip,
        language: Language,
    ) -> Result<TranscriptionReply, AssistantError> {
        let transcriber = self
            .transcriber
            .as_ref()
            .ok_or(AssistantError::SpeechUnavailable("transcription"))?;

        self.metrics.inc_transcription();
        let transcript = match transcriber.transcribe(audio, language).await {
            Ok(transcript) => transcript,
            Err(err) => {
                self.metrics.inc_transcription_failure();
                error!(error = %err, transcriber = transcriber.name(), "transcription failed");
                return Err(err.into());
            }
        };

        let recognized = transcript.is_recognized();
        if !recognized {
            self.metrics.inc_unrecognized_audio();
            warn!("could not understand the audio");
        }

        let text = transcript.into_text();
        info!(recognized, text = %preview(&text), "transcribed");
        Ok(TranscriptionReply {
            text,
            recognized,
            language,
        })
    }
}

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
    if text.chars().count() > LOG_PREVIEW_CHARS {
        out.push_str("...");
    }
    out
}
