pub mod content;
pub mod guidance;
pub mod intent;
pub mod models;

pub use content::LocalizedText;
pub use guidance::{GuidanceCatalog, GuidanceEngine, GuidanceEntry, TopicRule};
pub use intent::{detect_language, normalize_query, IntentClassifier, KeywordSet};
pub use models::*;
