//! Vigil classification heuristics.
//!
//! Everything in this crate is pure and synchronous:
//! - [`emotion`]: canonical emotion labels and the free-text label normalizer
//! - [`phishing`]: suspicious-keyword scoring and risk tiers
//! - [`security`]: the filename-based identity placeholder
//!
//! The lookup tables are `const` data shared by every request without
//! synchronization.

#![deny(unsafe_code)]

pub mod emotion;
pub mod phishing;
pub mod security;

pub use emotion::{normalize_label, EmotionLabel, EMOTION_SYNONYMS};
pub use phishing::{assess_phishing, PhishingAssessment, RiskTier, SUSPICIOUS_KEYWORDS};
pub use security::{check_filename, IdentityStatus, SecurityVerdict};
