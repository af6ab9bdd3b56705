use crate::content::{climate, health, schemes, welcome, LocalizedText};
use crate::intent::{contains_any, normalize_query, IntentClassifier};
use crate::models::{Intent, Language, QueryOutcome, SubTopic};

/// One entry of an ordered sub-topic list: if any needle occurs in the
/// lowercased query, `topic` is chosen.
#[derive(Debug, Clone, Copy)]
pub struct TopicRule {
    pub needles: &'static [&'static str],
    pub topic: SubTopic,
    pub text: LocalizedText,
}

/// Fever before cold/cough before stomach: the more urgent block wins when
/// a query mentions several symptoms.
pub const HEALTH_TOPICS: [TopicRule; 3] = [
    TopicRule {
        needles: &["fever", "बुखार", "జ్వరం", "temperature"],
        topic: SubTopic::Fever,
        text: health::FEVER,
    },
    TopicRule {
        needles: &["cold", "cough", "खांसी", "ठंड", "దగ్గు", "జలుబు"],
        topic: SubTopic::ColdCough,
        text: health::COLD_COUGH,
    },
    TopicRule {
        needles: &[
            "stomach",
            "diarrhea",
            "vomit",
            "पेट",
            "दस्त",
            "उल्टी",
            "కడుపు",
            "విరేచనాలు",
            "వాంతులు",
        ],
        topic: SubTopic::Stomach,
        text: health::STOMACH,
    },
];

pub const CLIMATE_TOPICS: [TopicRule; 2] = [
    TopicRule {
        needles: &["heatwave", "hot", "heat", "गर्मी", "వేడి"],
        topic: SubTopic::Heatwave,
        text: climate::HEATWAVE,
    },
    TopicRule {
        needles: &["flood", "rain", "water", "बाढ़", "वर्षा", "వరద"],
        topic: SubTopic::Flood,
        text: climate::FLOOD,
    },
];

/// A resolved guidance block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuidanceEntry {
    pub topic: Option<SubTopic>,
    pub text: &'static str,
}

#[derive(Debug, Clone)]
pub struct GuidanceCatalog {
    health_topics: Vec<TopicRule>,
    health_fallback: LocalizedText,
    climate_topics: Vec<TopicRule>,
    climate_fallback: LocalizedText,
    schemes: LocalizedText,
    welcome: LocalizedText,
}

impl Default for GuidanceCatalog {
    fn default() -> Self {
        Self {
            health_topics: HEALTH_TOPICS.to_vec(),
            health_fallback: health::GENERAL_HEALTH,
            climate_topics: CLIMATE_TOPICS.to_vec(),
            climate_fallback: climate::GENERAL_WEATHER,
            schemes: schemes::SCHEMES,
            welcome: welcome::WELCOME,
        }
    }
}

impl GuidanceCatalog {
    pub fn lookup(&self, intent: Intent, query: &str, language: Language) -> &'static str {
        self.resolve(intent, query, language).text
    }

    /// Picks the block for `intent` and reports which sub-topic it came from.
    /// Every combination resolves; there is no empty or missing outcome.
    pub fn resolve(&self, intent: Intent, query: &str, language: Language) -> GuidanceEntry {
        match intent {
            Intent::Health => resolve_topic(
                &self.health_topics,
                (SubTopic::GeneralHealth, self.health_fallback),
                query,
                language,
            ),
            Intent::Climate => resolve_topic(
                &self.climate_topics,
                (SubTopic::GeneralWeather, self.climate_fallback),
                query,
                language,
            ),
            Intent::Schemes => GuidanceEntry {
                topic: None,
                text: self.schemes.get(language),
            },
            Intent::General => GuidanceEntry {
                topic: None,
                text: self.welcome.get(language),
            },
        }
    }
}

// A matched sub-topic without a translation falls back to the English text of
// the same sub-topic, never to a different one.
fn resolve_topic(
    rules: &[TopicRule],
    fallback: (SubTopic, LocalizedText),
    query: &str,
    language: Language,
) -> GuidanceEntry {
    let normalized = normalize_query(query);
    let (topic, text) = rules
        .iter()
        .find(|rule| contains_any(&normalized, rule.needles))
        .map(|rule| (rule.topic, rule.text))
        .unwrap_or(fallback);

    GuidanceEntry {
        topic: Some(topic),
        text: text.get(language),
    }
}

/// Classifier and catalog composed into the query pipeline.
#[derive(Debug, Clone, Default)]
pub struct GuidanceEngine {
    classifier: IntentClassifier,
    catalog: GuidanceCatalog,
}

impl GuidanceEngine {
    pub fn new(classifier: IntentClassifier, catalog: GuidanceCatalog) -> Self {
        Self {
            classifier,
            catalog,
        }
    }

    pub fn process_query(&self, text: &str, language: Language) -> QueryOutcome {
        let intent = self.classifier.detect(text);
        let entry = self.catalog.resolve(intent, text, language);

        QueryOutcome {
            intent,
            topic: entry.topic,
            language,
            guidance: entry.text,
        }
    }
}
