//! Keyword-scored phishing heuristic.

use serde::{Deserialize, Serialize};

/// Phrases that count towards the phishing score, in reporting order.
pub const SUSPICIOUS_KEYWORDS: [&str; 19] = [
    "atm",
    "kyc",
    "blocked",
    "urgent",
    "password",
    "verification",
    "click",
    "click here",
    "bank",
    "update",
    "otp",
    "account suspended",
    "hacked",
    "retrieve",
    "recover",
    "send otp",
    "fraud",
    "unauthorized",
    "reset account",
];

/// Coarse risk bucket derived from the keyword score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Safe,
    Medium,
    High,
}

impl RiskTier {
    /// `>= 3` is high, exactly 2 is medium, anything lower is safe.
    pub fn from_score(score: usize) -> Self {
        match score {
            0 | 1 => RiskTier::Safe,
            2 => RiskTier::Medium,
            _ => RiskTier::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Medium => "medium",
            RiskTier::High => "high",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishingAssessment {
    pub risk: RiskTier,
    pub score: usize,
    pub matched_keywords: Vec<String>,
}

/// Score `text` against [`SUSPICIOUS_KEYWORDS`].
///
/// Matching is case-insensitive substring containment with no word
/// boundaries, so `bank` matches inside `banking`. Overlapping phrases count
/// separately: `click here` scores both `click` and `click here`.
pub fn assess_phishing(text: &str) -> PhishingAssessment {
    let text = text.to_lowercase();

    let matched_keywords: Vec<String> = SUSPICIOUS_KEYWORDS
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect();
    let score = matched_keywords.len();
    let risk = RiskTier::from_score(score);

    tracing::debug!(score, risk = %risk, "scored phishing keywords");

    PhishingAssessment {
        risk,
        score,
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kyc_scam_message_is_high_risk() {
        let assessment =
            assess_phishing("Your account is blocked, urgent KYC verification needed, click here");

        assert_eq!(
            assessment.matched_keywords,
            vec![
                "kyc",
                "blocked",
                "urgent",
                "verification",
                "click",
                "click here"
            ]
        );
        assert_eq!(assessment.score, 6);
        assert_eq!(assessment.risk, RiskTier::High);
    }

    #[test]
    fn test_empty_text_is_safe() {
        let assessment = assess_phishing("");
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.risk, RiskTier::Safe);
        assert!(assessment.matched_keywords.is_empty());
    }

    #[test]
    fn test_substring_matches_without_word_boundary() {
        let assessment = assess_phishing("Online banking");
        assert_eq!(assessment.matched_keywords, vec!["bank"]);
        assert_eq!(assessment.risk, RiskTier::Safe);
    }

    #[test]
    fn test_two_matches_is_medium() {
        let assessment = assess_phishing("Please update your password");
        assert_eq!(assessment.score, 2);
        assert_eq!(assessment.risk, RiskTier::Medium);
    }

    #[test]
    fn test_matches_follow_table_order() {
        let assessment = assess_phishing("fraud alert at the atm");
        assert_eq!(assessment.matched_keywords, vec!["atm", "fraud"]);
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(RiskTier::from_score(0), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(1), RiskTier::Safe);
        assert_eq!(RiskTier::from_score(2), RiskTier::Medium);
        assert_eq!(RiskTier::from_score(3), RiskTier::High);
        assert_eq!(RiskTier::from_score(19), RiskTier::High);
    }

    #[test]
    fn test_assessment_json_shape() {
        let value = serde_json::to_value(assess_phishing("send OTP now")).unwrap();
        assert_eq!(value["risk"], "medium");
        assert_eq!(value["score"], 2);
        assert_eq!(value["matched_keywords"], serde_json::json!(["otp", "send otp"]));
    }
}
