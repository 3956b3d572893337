//! Canonical emotion labels and the normalizer that maps free-form model
//! replies onto them.

use serde::{Deserialize, Serialize};

/// One of the seven labels the gateway will ever report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Fear,
    Disgust,
    Surprise,
    Neutral,
}

impl EmotionLabel {
    /// All labels in matching priority order.
    pub const ALL: [EmotionLabel; 7] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Fear,
        EmotionLabel::Disgust,
        EmotionLabel::Surprise,
        EmotionLabel::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Disgust => "disgust",
            EmotionLabel::Surprise => "surprise",
            EmotionLabel::Neutral => "neutral",
        }
    }

    /// Synonyms recognized for this label, in matching order.
    pub fn synonyms(&self) -> &'static [&'static str] {
        EMOTION_SYNONYMS
            .iter()
            .find(|(label, _)| label == self)
            .map(|(_, synonyms)| *synonyms)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label -> synonym table. Each label lists its own name first.
pub const EMOTION_SYNONYMS: &[(EmotionLabel, &[&str])] = &[
    (
        EmotionLabel::Happy,
        &["happy", "joy", "joyful", "delighted", "smiling"],
    ),
    (EmotionLabel::Sad, &["sad", "sadness", "down", "upset"]),
    (
        EmotionLabel::Angry,
        &["angry", "anger", "mad", "furious", "irritated"],
    ),
    (
        EmotionLabel::Fear,
        &["fear", "afraid", "scared", "terrified"],
    ),
    (EmotionLabel::Disgust, &["disgust", "disgusted", "gross"]),
    (
        EmotionLabel::Surprise,
        &["surprise", "surprised", "shocked", "astonished"],
    ),
    (
        EmotionLabel::Neutral,
        &["neutral", "calm", "relaxed", "no strong emotion"],
    ),
];

/// Map arbitrary model output onto a canonical label.
///
/// The first pass walks the synonym table in order and returns the first
/// label with a synonym occurring anywhere in the text. The second pass looks
/// for bare label names, which catches replies such as `emotion: happy`.
/// Anything else is [`EmotionLabel::Neutral`]. Never fails.
pub fn normalize_label(raw: &str) -> EmotionLabel {
    let text = raw.to_lowercase();

    for label in EmotionLabel::ALL {
        if label.synonyms().iter().any(|synonym| text.contains(synonym)) {
            return label;
        }
    }

    // Redundant with the first pass while every label lists itself as a
    // synonym; kept so the two tables can diverge.
    for label in EmotionLabel::ALL {
        if text.contains(label.as_str()) {
            return label;
        }
    }

    EmotionLabel::Neutral
}
