//! Deterministic insight text derived from computed scores.
//!
//! No model calls: the same numbers always produce the same strings, so
//! results stay reproducible and cheap to regenerate.

use serde::{Deserialize, Serialize};

use crate::profile::Education;

/// Interview recommendation tag mirroring the qualification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Qualified,
    NotQualified,
}

/// Human-readable scoring narrative shipped with every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_development: Vec<String>,
    pub interview_recommendation: Recommendation,
}

/// Numbers the insight templates draw from. Scores arrive unrounded; the
/// templates format them.
#[derive(Debug, Clone)]
pub struct InsightInputs {
    pub total_score: f64,
    pub qualified: bool,
    pub must_have_matched: usize,
    pub must_have_total: usize,
    pub nice_to_have_matched: usize,
    pub experience_years: u32,
    pub education: Education,
}

/// Builds the insight block. Bullet order is fixed: skills, experience,
/// education, so downstream views render consistently.
pub fn build_insights(inputs: &InsightInputs) -> Insights {
    let mut summary = format!(
        "Candidate scored {:.1} out of 100 points. Meets {}/{} must-have requirements.",
        inputs.total_score, inputs.must_have_matched, inputs.must_have_total
    );

    let mut strengths = Vec::new();
    let mut areas_for_development = Vec::new();

    if inputs.must_have_matched > 0 {
        strengths.push(format!(
            "Has {} of {} key skills",
            inputs.must_have_matched, inputs.must_have_total
        ));
    }

    if inputs.must_have_matched as f64 >= inputs.must_have_total as f64 * 0.7 {
        strengths.push("Meets most must-have requirements".to_string());
    } else if inputs.must_have_matched == 0 {
        areas_for_development.push("Missing key technical skills".to_string());
    }

    if inputs.nice_to_have_matched > 0 {
        strengths.push(format!(
            "Additional skills: {} nice-to-have",
            inputs.nice_to_have_matched
        ));
    }

    if inputs.experience_years >= 5 {
        strengths.push(format!(
            "Extensive experience ({} years)",
            inputs.experience_years
        ));
    } else if inputs.experience_years >= 2 {
        strengths.push(format!(
            "Solid experience ({} years)",
            inputs.experience_years
        ));
    } else if inputs.experience_years < 1 {
        areas_for_development.push("Limited professional experience".to_string());
    }

    if inputs.education == Education::Higher {
        strengths.push("Higher education".to_string());
    }

    if inputs.total_score >= 50.0 {
        summary.push_str(" Strong candidate.");
    } else if inputs.total_score >= 30.0 {
        summary.push_str(" Promising candidate with potential.");
    } else if inputs.total_score >= 20.0 {
        summary.push_str(" Worth considering - focus on soft skills.");
    }

    Insights {
        summary,
        strengths,
        areas_for_development,
        interview_recommendation: if inputs.qualified {
            Recommendation::Qualified
        } else {
            Recommendation::NotQualified
        },
    }
}
