use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use saarthi_core::Intent;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

#[derive(Debug, Default)]
pub struct AppMetrics {
    queries_total: AtomicU64,
    health_total: AtomicU64,
    schemes_total: AtomicU64,
    climate_total: AtomicU64,
    general_total: AtomicU64,
    transcriptions_total: AtomicU64,
    transcription_failures_total: AtomicU64,
    unrecognized_audio_total: AtomicU64,
    syntheses_total: AtomicU64,
    synthesis_failures_total: AtomicU64,
    total_latency_micros: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntentCounts {
    pub health: u64,
    pub schemes: u64,
    pub climate: u64,
    pub general: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub queries_total: u64,
    pub intents: IntentCounts,
    pub transcriptions_total: u64,
    pub transcription_failures_total: u64,
    pub unrecognized_audio_total: u64,
    pub syntheses_total: u64,
    pub synthesis_failures_total: u64,
    pub avg_query_latency_micros: f64,
}

impl AppMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record_query(&self, intent: Intent, duration: Duration) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
        let counter = match intent {
            Intent::Health => &self.health_total,
            Intent::Schemes => &self.schemes_total,
            Intent::Climate => &self.climate_total,
            Intent::General => &self.general_total,
        };
        counter.fetch_add(1, Ordering::Relaxed);
        self.total_latency_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        metrics::counter!("saarthi_queries_total", "intent" => intent.as_str()).increment(1);
    }

    pub fn inc_transcription(&self) {
        self.transcriptions_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("saarthi_transcriptions_total").increment(1);
    }

    pub fn inc_transcription_failure(&self) {
        self.transcription_failures_total
            .fetch_add(1, Ordering::Relaxed);
        metrics::counter!("saarthi_transcription_failures_total").increment(1);
    }

    pub fn inc_unrecognized_audio(&self) {
        self.unrecognized_audio_total
            .fetch_add(1, Ordering::Relaxed);
        metrics::counter!("saarthi_unrecognized_audio_total").increment(1);
    }

    pub fn inc_synthesis(&self) {
        self.syntheses_total.fetch_add(1, Ordering::Relaxed);
        metrics::counter!("saarthi_syntheses_total").increment(1);
    }

    pub fn inc_synthesis_failure(&self) {
        self.synthesis_failures_total
            .fetch_add(1, Ordering::Relaxed);
        metrics::counter!("saarthi_synthesis_failures_total").increment(1);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let queries = self.queries_total.load(Ordering::Relaxed);
        let latency = self.total_latency_micros.load(Ordering::Relaxed);

        MetricsSnapshot {
            queries_total: queries,
            intents: IntentCounts {
                health: self.health_total.load(Ordering::Relaxed),
                schemes: self.schemes_total.load(Ordering::Relaxed),
                climate: self.climate_total.load(Ordering::Relaxed),
                general: self.general_total.load(Ordering::Relaxed),
            },
            transcriptions_total: self.transcriptions_total.load(Ordering::Relaxed),
            transcription_failures_total: self
                .transcription_failures_total
                .load(Ordering::Relaxed),
            unrecognized_audio_total: self.unrecognized_audio_total.load(Ordering::Relaxed),
            syntheses_total: self.syntheses_total.load(Ordering::Relaxed),
            synthesis_failures_total: self.synthesis_failures_total.load(Ordering::Relaxed),
            avg_query_latency_micros: if queries == 0 {
                0.0
            } else {
                latency as f64 / queries as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}=info,saarthi_api=info,saarthi_assistant=info,saarthi_speech=info",
                service_name
            ))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
