//! Candidate scorer: weighted requirement matching folded into a 0-100
//! composite, with qualification decision, per-requirement match lists, and
//! generated insights.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::ScoringInputError;
use crate::profile::{CandidateProfile, Education};
use crate::requirements::{RequirementProfile, SkillRequirement};
use crate::scoring::insights::{build_insights, InsightInputs, Insights};
use crate::scoring::weights::ComponentWeights;
use crate::scoring::{round1, skills};

// ────────────────────────────────────────────────────────────────────────────
// Tunables
// ────────────────────────────────────────────────────────────────────────────

/// Total score at or above which a candidate advances to the interview stage.
pub const QUALIFICATION_THRESHOLD: u32 = 20;

/// Flat bonus for matching at least one must-have requirement.
const MUST_HAVE_BONUS: f64 = 30.0;
/// Points per year of experience, and the cap they accumulate toward.
const POINTS_PER_YEAR: u32 = 8;
const EXPERIENCE_CAP: u32 = 40;
/// Education points: higher education vs anything else.
const EDUCATION_HIGHER_POINTS: u32 = 15;
const EDUCATION_OTHER_POINTS: u32 = 8;
/// Skill sub-scores saturate here.
const MAX_SCORE: f64 = 100.0;
/// Level recorded for must-have requirements that declare none.
const DEFAULT_LEVEL: &str = "basic";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One requirement's match outcome. Must-have entries record the required
/// level; nice-to-have entries leave it out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementMatch {
    pub skill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_level: Option<String>,
    pub matched: bool,
    pub weight: f64,
}

/// Per-component contribution toward the composite.
///
/// The experience and education rows apply a flat 0.1 factor rather than the
/// reconciled component weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub must_have_percentage: f64,
    pub nice_to_have_percentage: f64,
    pub experience_percentage: f64,
    pub education_percentage: f64,
}

/// Full scoring output. Built fresh per evaluation, never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub must_have_score: f64,
    pub nice_to_have_score: f64,
    pub experience_score: u32,
    pub education_score: u32,
    pub qualified_for_interview: bool,
    pub qualification_threshold: u32,
    pub must_have_matches: Vec<RequirementMatch>,
    pub nice_to_have_matches: Vec<RequirementMatch>,
    pub ai_insights: Insights,
    pub breakdown: ScoreBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores a candidate against a requirement profile.
///
/// Pure and deterministic: identical inputs give an identical result, no
/// clock or randomness involved, safe to call from concurrent workers.
pub fn compute_candidate_score(
    candidate: &CandidateProfile,
    requirements: &RequirementProfile,
) -> ScoreResult {
    let all_skills: Vec<String> = candidate
        .technologies
        .iter()
        .chain(candidate.soft_skills.iter())
        .cloned()
        .collect();

    let (must_have_score, must_have_matches) =
        score_must_have(&requirements.must_have, &all_skills);
    let (nice_to_have_score, nice_to_have_matches) =
        score_nice_to_have(&requirements.nice_to_have, &all_skills);

    let experience_score = candidate
        .experience_years
        .saturating_mul(POINTS_PER_YEAR)
        .min(EXPERIENCE_CAP);
    let education_score = match candidate.education {
        Education::Higher => EDUCATION_HIGHER_POINTS,
        Education::Other => EDUCATION_OTHER_POINTS,
    };

    let weights = ComponentWeights::reconcile(&requirements.formula);

    let total = (must_have_score / MAX_SCORE) * weights.must_have * 100.0
        + (nice_to_have_score / MAX_SCORE) * weights.nice_to_have * 100.0
        + (f64::from(experience_score) / f64::from(EXPERIENCE_CAP)) * weights.experience * 100.0
        + (f64::from(education_score) / f64::from(EDUCATION_HIGHER_POINTS))
            * weights.education
            * 100.0;

    // Qualification compares the raw total; rounding is display-only.
    let qualified = total >= f64::from(QUALIFICATION_THRESHOLD);

    let must_have_matched = must_have_matches.iter().filter(|m| m.matched).count();
    let nice_to_have_matched = nice_to_have_matches.iter().filter(|m| m.matched).count();

    let ai_insights = build_insights(&InsightInputs {
        total_score: total,
        qualified,
        must_have_matched,
        must_have_total: must_have_matches.len(),
        nice_to_have_matched,
        experience_years: candidate.experience_years,
        education: candidate.education,
    });

    let breakdown = ScoreBreakdown {
        must_have_percentage: round1(must_have_score * weights.must_have),
        nice_to_have_percentage: round1(nice_to_have_score * weights.nice_to_have),
        experience_percentage: round1(f64::from(experience_score) * 0.1),
        education_percentage: round1(f64::from(education_score) * 0.1),
    };

    debug!(
        total = round1(total),
        must_have_score,
        nice_to_have_score,
        experience_score,
        education_score,
        qualified,
        "scored candidate"
    );

    ScoreResult {
        total_score: round1(total),
        must_have_score: round1(must_have_score),
        nice_to_have_score: round1(nice_to_have_score),
        experience_score,
        education_score,
        qualified_for_interview: qualified,
        qualification_threshold: QUALIFICATION_THRESHOLD,
        must_have_matches,
        nice_to_have_matches,
        ai_insights,
        breakdown,
    }
}

/// JSON boundary: parses the requirements, extracts the candidate, scores.
///
/// Candidate-side noise degrades to defaults; a structurally-invalid
/// requirement profile is the only error path.
pub fn score_candidate(
    cv_data: &Value,
    job_requirements: &Value,
) -> Result<ScoreResult, ScoringInputError> {
    let requirements = RequirementProfile::from_value(job_requirements)?;
    let candidate = CandidateProfile::from_value(cv_data);
    Ok(compute_candidate_score(&candidate, &requirements))
}

fn score_must_have(
    requirements: &[SkillRequirement],
    candidate_skills: &[String],
) -> (f64, Vec<RequirementMatch>) {
    let total_weight = effective_total_weight(requirements);

    let mut score = 0.0;
    let mut matches = Vec::with_capacity(requirements.len());
    let mut any_matched = false;

    for requirement in requirements {
        let matched = skills::matches(&requirement.skill, candidate_skills);
        if matched {
            any_matched = true;
            score += (requirement.weight / total_weight) * MAX_SCORE;
        }
        matches.push(RequirementMatch {
            skill: requirement.skill.clone(),
            required_level: Some(
                requirement
                    .level
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            ),
            matched,
            weight: requirement.weight,
        });
    }

    if any_matched {
        score = (score + MUST_HAVE_BONUS).min(MAX_SCORE);
    }

    (score, matches)
}

fn score_nice_to_have(
    requirements: &[SkillRequirement],
    candidate_skills: &[String],
) -> (f64, Vec<RequirementMatch>) {
    if requirements.is_empty() {
        return (0.0, Vec::new());
    }
    let total_weight = effective_total_weight(requirements);

    let mut score = 0.0;
    let mut matches = Vec::with_capacity(requirements.len());

    for requirement in requirements {
        let matched = skills::matches(&requirement.skill, candidate_skills);
        if matched {
            score += (requirement.weight / total_weight) * MAX_SCORE;
        }
        matches.push(RequirementMatch {
            skill: requirement.skill.clone(),
            required_level: None,
            matched,
            weight: requirement.weight,
        });
    }

    (score, matches)
}

/// Sum of requirement weights, treated as 1 when it would not be positive.
fn effective_total_weight(requirements: &[SkillRequirement]) -> f64 {
    let total: f64 = requirements.iter().map(|r| r.weight).sum();
    if total > 0.0 {
        total
    } else {
        1.0
    }
}
