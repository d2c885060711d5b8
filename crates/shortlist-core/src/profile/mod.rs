//! Candidate profile: the normalized shape scoring runs on.
//!
//! Extraction (in [`extract`]) flattens the two upstream CV schemas into this
//! one struct, so the scorer itself never touches raw JSON.

pub mod extract;

pub use extract::extract_json_payload;

use serde::{Deserialize, Serialize};

/// Education bucket the scorer recognizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    Higher,
    #[default]
    Other,
}

/// Candidate attributes relevant to scoring. Every field carries a usable
/// default, so a fully-defaulted profile still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub technologies: Vec<String>,
    pub soft_skills: Vec<String>,
    pub experience_years: u32,
    pub education: Education,
}
