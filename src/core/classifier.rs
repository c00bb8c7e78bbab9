use crate::core::catalog::exercises_for;
use crate::domain::model::{BodyRegion, ClassificationResult};
use crate::domain::ports::Classifier;

/// Keyword rules in priority order. The first rule with any keyword
/// contained in the lowercased input wins.
// Plain substring containment: "arm" also hits "farm"/"alarm", "leg" hits "legal".
pub static KEYWORD_RULES: &[(BodyRegion, &[&str])] = &[
    (BodyRegion::Shoulder, &["shoulder", "arm"]),
    (BodyRegion::Back, &["back", "spine"]),
    (BodyRegion::Knee, &["knee", "leg"]),
];

pub fn classify(input: &str) -> ClassificationResult {
    let lowered = input.to_lowercase();

    for (region, keywords) in KEYWORD_RULES {
        if let Some(keyword) = keywords.iter().find(|k| lowered.contains(*k)) {
            tracing::debug!("Matched keyword '{}' -> {} bucket", keyword, region);
            return ClassificationResult {
                region: *region,
                matched_keyword: Some(*keyword),
                exercises: exercises_for(*region),
            };
        }
    }

    tracing::debug!("No keyword matched, using general bucket");
    ClassificationResult {
        region: BodyRegion::General,
        matched_keyword: None,
        exercises: exercises_for(BodyRegion::General),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, input: &str) -> ClassificationResult {
        classify(input)
    }
}
