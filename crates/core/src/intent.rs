use crate::models::{Intent, Language};

/// Immutable list of lowercase trigger phrases for one category.
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet {
    pub name: &'static str,
    needles: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, needles: &'static [&'static str]) -> Self {
        Self { name, needles }
    }

    pub fn needles(&self) -> &'static [&'static str] {
        self.needles
    }

    /// `normalized` must already be lowercased; matching is plain substring
    /// containment, so a needle also fires inside a longer word.
    pub fn matches(&self, normalized: &str) -> bool {
        contains_any(normalized, self.needles)
    }
}

pub const HEALTH_KEYWORDS: KeywordSet = KeywordSet::new(
    "health",
    &[
        "fever",
        "temperature",
        "sick",
        "pain",
        "headache",
        "cold",
        "flu",
        "cough",
        "vomit",
        "diarrhea",
        "injury",
        "wound",
        "burn",
        "bleeding",
        "stomach",
        "chest",
        "breathing",
        "dizzy",
        "nausea",
        "rash",
        "allergy",
        "infection",
        "dengue",
        "malaria",
        "typhoid",
        "diabetes",
        "pressure",
        "fracture",
        "sprain",
        "swelling",
        "bite",
        "sting",
        "faint",
        "बुखार",
        "दर्द",
        "सिरदर्द",
        "खांसी",
        "ठंड",
        "पेट",
        "चोट",
        "जलना",
        "खून",
        "उल्टी",
        "दस्त",
        "सांस",
        "चक्कर",
        "एलर्जी",
        "संक्रमण",
        "జ్వరం",
        "నొప్పి",
        "తలనొప్పి",
        "దగ్గు",
        "జలుబు",
        "కడుపు",
        "గాయం",
        "కాలుట",
        "రక్తం",
        "వాంతులు",
        "విరేచనాలు",
        "శ్వాస",
        "అలెర్జీ",
    ],
);

pub const SCHEME_KEYWORDS: KeywordSet = KeywordSet::new(
    "schemes",
    &[
        "scheme",
        "yojana",
        "application",
        "benefit",
        "subsidy",
        "grant",
        "pension",
        "ration",
        "card",
        "apply",
        "form",
        "government",
        "welfare",
        "ayushman",
        "awas",
        "ujjwala",
        "scholarship",
        "loan",
        "farmers",
        "widow",
        "disability",
        "employment",
        "skill",
        "training",
        "mudra",
        "pmjdy",
        "pmksy",
        "pmfby",
        "documents",
        "eligibility",
        "योजना",
        "आवेदन",
        "लाभ",
        "पेंशन",
        "राशन",
        "सब्सिडी",
        "कार्ड",
        "छात्रवृत्ति",
        "ऋण",
        "किसान",
        "विधवा",
        "रोजगार",
        "प्रशिक्षण",
        "పథకం",
        "దరఖాస్తు",
        "ప్రయోజనం",
        "పెన్షన్",
        "రేషన్",
        "సబ్సిడీ",
        "స్కాలర్షిప్",
        "రుణం",
        "రైతు",
        "ఉద్యోగం",
    ],
);

pub const CLIMATE_KEYWORDS: KeywordSet = KeywordSet::new(
    "climate",
    &[
        "heatwave",
        "flood",
        "warning",
        "rain",
        "storm",
        "cyclone",
        "tornado",
        "drought",
        "hot",
        "cold",
        "weather",
        "disaster",
        "alert",
        "emergency",
        "lightning",
        "earthquake",
        "tsunami",
        "landslide",
        "fire",
        "smoke",
        "pollution",
        "air",
        "water",
        "evacuation",
        "shelter",
        "rescue",
        "गर्मी",
        "बाढ़",
        "चेतावनी",
        "बारिश",
        "तूफान",
        "सूखा",
        "आंधी",
        "बिजली",
        "भूकंप",
        "आग",
        "प्रदूषण",
        "निकासी",
        "వేడి",
        "వరద",
        "హెచ్చరిక",
        "వర్షం",
        "తుఫాను",
        "కరువు",
        "మెరుపు",
        "భూకంపం",
        "అగ్ని",
        "కాలుష్యం",
        "తరలింపు",
    ],
);

/// First-match-wins keyword classifier.
///
/// Rules are evaluated in order and the first set with any hit decides the
/// intent. Health is first so a query that also mentions a scheme or the
/// weather is still treated as a health question.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<(KeywordSet, Intent)>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new(vec![
            (HEALTH_KEYWORDS, Intent::Health),
            (SCHEME_KEYWORDS, Intent::Schemes),
            (CLIMATE_KEYWORDS, Intent::Climate),
        ])
    }
}

impl IntentClassifier {
    pub fn new(rules: Vec<(KeywordSet, Intent)>) -> Self {
        Self { rules }
    }

    pub fn detect(&self, text: &str) -> Intent {
        let normalized = normalize_query(text);
        self.rules
            .iter()
            .find(|(keywords, _)| keywords.matches(&normalized))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::General)
    }
}

/// Lowercases for Latin keyword matching. Devanagari and Telugu have no case,
/// so those characters pass through untouched.
pub fn normalize_query(input: &str) -> String {
    input.to_lowercase()
}

/// Guesses the reply language from the dominant script. Returns `None` when
/// the text has no letters from a supported script.
pub fn detect_language(text: &str) -> Option<Language> {
    let mut devanagari_count = 0usize;
    let mut telugu_count = 0usize;
    let mut latin_count = 0usize;

    for ch in text.chars() {
        let code = ch as u32;
        if (0x0900..=0x097F).contains(&code) {
            devanagari_count += 1;
        } else if (0x0C00..=0x0C7F).contains(&code) {
            telugu_count += 1;
        } else if ch.is_ascii_alphabetic() {
            latin_count += 1;
        }
    }

    if devanagari_count == 0 && telugu_count == 0 {
        return (latin_count > 0).then_some(Language::En);
    }

    if telugu_count > devanagari_count {
        Some(Language::Te)
    } else {
        Some(Language::Hi)
    }
}

pub(crate) fn contains_any(input: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| input.contains(needle))
}
