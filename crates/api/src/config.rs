use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_WEB_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/web");
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5000", "http://127.0.0.1:5000"];

/// Runtime settings for the HTTP service, read once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind: String,
    pub stt_url: Option<String>,
    pub tts_url: Option<String>,
    pub speech_timeout: Duration,
    pub allowed_origins: Vec<String>,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
    pub max_upload_bytes: usize,
    /// Directory holding `index.html` and the `static/` assets of the browser client.
    pub web_root: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            stt_url: None,
            tts_url: None,
            speech_timeout: Duration::from_secs(20),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 60,
            max_upload_bytes: 10 * 1024 * 1024,
            web_root: PathBuf::from(DEFAULT_WEB_ROOT),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let parsed_u64 = |key: &str| non_empty(key).and_then(|value| value.parse::<u64>().ok());
        let parsed_usize =
            |key: &str| non_empty(key).and_then(|value| value.parse::<usize>().ok());

        Self {
            bind: non_empty("SAARTHI_BIND").unwrap_or(defaults.bind),
            stt_url: non_empty("SAARTHI_STT_URL"),
            tts_url: non_empty("SAARTHI_TTS_URL"),
            speech_timeout: parsed_u64("SAARTHI_SPEECH_TIMEOUT_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.speech_timeout),
            allowed_origins: non_empty("SAARTHI_ALLOWED_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or(defaults.allowed_origins),
            rate_limit_window: parsed_u64("SAARTHI_RATE_LIMIT_WINDOW_SECONDS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            rate_limit_max: parsed_usize("SAARTHI_RATE_LIMIT_MAX")
                .unwrap_or(defaults.rate_limit_max),
            max_upload_bytes: parsed_usize("SAARTHI_MAX_UPLOAD_BYTES")
                .unwrap_or(defaults.max_upload_bytes),
            web_root: non_empty("SAARTHI_WEB_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.web_root),
        }
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ServiceConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_leave_speech_disabled() {
        let config = config_from(&[]);
        assert_eq!(config.bind, DEFAULT_BIND);
        assert!(config.stt_url.is_none());
        assert!(config.tts_url.is_none());
        assert_eq!(config.rate_limit_max, 60);
        assert!(config.web_root.join("index.html").is_file());
    }

    #[test]
    fn reads_overrides_and_ignores_garbage() {
        let config = config_from(&[
            ("SAARTHI_BIND", "127.0.0.1:9000"),
            ("SAARTHI_STT_URL", " http://stt:8090 "),
            ("SAARTHI_TTS_URL", "   "),
            ("SAARTHI_RATE_LIMIT_MAX", "many"),
            ("SAARTHI_SPEECH_TIMEOUT_SECONDS", "5"),
            ("SAARTHI_WEB_ROOT", "/srv/saarthi"),
            (
                "SAARTHI_ALLOWED_ORIGINS",
                "https://saarthi.example/, ,http://localhost:3000",
            ),
        ]);
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.stt_url.as_deref(), Some("http://stt:8090"));
        assert!(config.tts_url.is_none());
        assert_eq!(config.rate_limit_max, 60);
        assert_eq!(config.speech_timeout, Duration::from_secs(5));
        assert_eq!(config.web_root, PathBuf::from("/srv/saarthi"));
        assert_eq!(
            config.allowed_origins,
            vec!["https://saarthi.example", "http://localhost:3000"]
        );
    }
}
