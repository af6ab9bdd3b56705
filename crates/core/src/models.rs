use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Health,
    Schemes,
    Climate,
    General,
}

impl Intent {
    pub const ALL: [Intent; 4] = [Self::Health, Self::Schemes, Self::Climate, Self::General];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Schemes => "schemes",
            Self::Climate => "climate",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Hi,
    Te,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::En, Self::Hi, Self::Te];

    /// Strict parse used at the request boundary: exactly `en`, `hi` or
    /// `te`. Names, regional tags and other casings are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "te" => Some(Self::Te),
            _ => None,
        }
    }

    /// Lenient parse: unknown or missing codes resolve to English content.
    pub fn from_optional_str(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or(Self::En)
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
        }
    }

    /// Locale tag expected by the speech recognizer.
    pub fn speech_locale(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::Hi => "hi-IN",
            Self::Te => "te-IN",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Guidance block selected inside an intent. `Schemes` and `General` have a
/// single block each and carry no sub-topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTopic {
    Fever,
    ColdCough,
    Stomach,
    GeneralHealth,
    Heatwave,
    Flood,
    GeneralWeather,
}

impl SubTopic {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::ColdCough => "cold_cough",
            Self::Stomach => "stomach",
            Self::GeneralHealth => "general_health",
            Self::Heatwave => "heatwave",
            Self::Flood => "flood",
            Self::GeneralWeather => "general_weather",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub intent: Intent,
    pub topic: Option<SubTopic>,
    pub language: Language,
    pub guidance: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_rejects_other_codes() {
        assert_eq!(Language::parse(" hi "), Some(Language::Hi));
        assert_eq!(Language::parse("te"), Some(Language::Te));
        for rejected in ["HI", "EN", "te-IN", "hindi", "english", "telugu", "ta", ""] {
            assert_eq!(Language::parse(rejected), None, "{rejected} should be rejected");
        }
    }

    #[test]
    fn lenient_parse_falls_back_to_english() {
        assert_eq!(Language::from_optional_str(Some("fr")), Language::En);
        assert_eq!(Language::from_optional_str(None), Language::En);
        assert_eq!(Language::from_optional_str(Some("te")), Language::Te);
    }

    #[test]
    fn intent_serializes_as_label() {
        let value = serde_json::to_value(Intent::Schemes).unwrap();
        assert_eq!(value, serde_json::json!("schemes"));
        assert_eq!(Intent::Climate.to_string(), "climate");
    }
}
