//! Property tests for the label normalizer and the phishing scorer.

use proptest::prelude::*;
use vigil_classify::{
    assess_phishing, check_filename, normalize_label, EmotionLabel, IdentityStatus, RiskTier,
    EMOTION_SYNONYMS, SUSPICIOUS_KEYWORDS,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A label together with one of its own synonyms.
fn arb_label_synonym() -> impl Strategy<Value = (EmotionLabel, &'static str)> {
    (0..EMOTION_SYNONYMS.len()).prop_flat_map(|index| {
        let (label, synonyms) = EMOTION_SYNONYMS[index];
        prop::sample::select(synonyms).prop_map(move |synonym| (label, synonym))
    })
}

/// Filler that cannot spell any synonym: no synonym uses these letters, and
/// none starts or ends with one.
fn arb_filler() -> impl Strategy<Value = String> {
    "[jkqvwxz0-9 .,:!?-]{0,12}"
}

proptest! {
    #[test]
    fn single_synonym_maps_to_its_label(
        (label, synonym) in arb_label_synonym(),
        prefix in arb_filler(),
        suffix in arb_filler(),
    ) {
        let text = format!("{}{}{}", prefix, synonym, suffix);
        prop_assert_eq!(normalize_label(&text), label);
    }

    #[test]
    fn text_without_synonyms_is_neutral(text in "[jkqvwxzJKQVWXZ0-9 .,:!?-]{0,40}") {
        prop_assert_eq!(normalize_label(&text), EmotionLabel::Neutral);
    }

    #[test]
    fn normalizer_is_total_and_deterministic(text in any::<String>()) {
        let first = normalize_label(&text);
        let second = normalize_label(&text);
        prop_assert_eq!(first, second);
        prop_assert!(EmotionLabel::ALL.contains(&first));
    }

    #[test]
    fn phishing_score_counts_contained_keywords(text in "[a-zA-Z ]{0,80}") {
        let lowered = text.to_lowercase();
        let expected = SUSPICIOUS_KEYWORDS
            .iter()
            .filter(|keyword| lowered.contains(*keyword))
            .count();

        let assessment = assess_phishing(&text);
        prop_assert_eq!(assessment.score, expected);
        prop_assert_eq!(assessment.matched_keywords.len(), assessment.score);
    }

    #[test]
    fn embedded_keywords_are_always_reported(
        picks in prop::collection::vec(prop::sample::select(SUSPICIOUS_KEYWORDS.to_vec()), 0..6),
    ) {
        let text = picks.join(" | ").to_uppercase();
        let assessment = assess_phishing(&text);

        for keyword in &picks {
            prop_assert!(assessment.matched_keywords.iter().any(|m| m == keyword));
        }
        let expected_tier = match assessment.score {
            score if score >= 3 => RiskTier::High,
            2 => RiskTier::Medium,
            _ => RiskTier::Safe,
        };
        prop_assert_eq!(assessment.risk, expected_tier);
    }

    #[test]
    fn matched_keywords_follow_table_order(text in "[a-z ]{0,80}") {
        let assessment = assess_phishing(&text);
        let positions: Vec<usize> = assessment
            .matched_keywords
            .iter()
            .filter_map(|m| SUSPICIOUS_KEYWORDS.iter().position(|k| k == m))
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn filename_is_known_iff_it_contains_known(name in "[a-zA-Z_.]{0,24}") {
        let expected = if name.to_lowercase().contains("known") {
            IdentityStatus::Known
        } else {
            IdentityStatus::Unknown
        };
        prop_assert_eq!(check_filename(&name).status, expected);
    }
}
