//! Candidate scoring core for recruitment pipelines.
//!
//! Turns noisy extracted CV data and a weighted job-requirement profile into
//! a 0-100 suitability score, with a qualification decision, per-requirement
//! match lists, and deterministic insight text. Qualified results can be
//! handed an interview invite, and completed interviews fold back into one
//! soft-skill assessment.
//!
//! The crate owns no I/O: callers pass JSON mappings (or the typed profiles)
//! and persist results themselves.
//!
//! ```
//! use serde_json::json;
//! use shortlist_core::score_candidate;
//!
//! let cv = json!({ "technologies": ["Python", "Docker"], "experience_years": 4 });
//! let job = json!({
//!     "requirements_must_have": [{ "skill": "python", "weight": 2 }]
//! });
//!
//! let result = score_candidate(&cv, &job)?;
//! assert!(result.qualified_for_interview);
//! # Ok::<(), shortlist_core::ScoringInputError>(())
//! ```

pub mod errors;
pub mod interview;
pub mod profile;
pub mod requirements;
pub mod scoring;

pub use errors::ScoringInputError;
pub use interview::assessment::{aggregate_assessments, InterviewSummary, ASSESSMENT_DIMENSIONS};
pub use interview::invite::{InterviewInvite, InviteStatus};
pub use profile::{extract_json_payload, CandidateProfile, Education};
pub use requirements::{RequirementProfile, ScoringFormula, SkillRequirement};
pub use scoring::insights::{Insights, Recommendation};
pub use scoring::scorer::{
    compute_candidate_score, score_candidate, RequirementMatch, ScoreBreakdown, ScoreResult,
    QUALIFICATION_THRESHOLD,
};
pub use scoring::skills::{matches, normalize_skill};
pub use scoring::weights::ComponentWeights;
