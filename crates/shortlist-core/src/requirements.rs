//! Requirement profile parsing.
//!
//! Unlike candidate data, the requirement side has an author who can fix it,
//! so shape violations are rejected instead of papered over. Missing fields
//! still default: an absent list is empty, an absent weight is 1, an absent
//! formula takes the recruiter-tuned split.

use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{json_type_name, ScoringInputError};

/// A single skill requirement from the job profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillRequirement {
    pub skill: String,
    pub level: Option<String>,
    pub weight: f64,
}

/// Recruiter-set weights for the two requirement groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringFormula {
    pub must_have_weight: f64,
    pub nice_to_have_weight: f64,
}

impl Default for ScoringFormula {
    fn default() -> Self {
        Self {
            must_have_weight: 0.6,
            nice_to_have_weight: 0.25,
        }
    }
}

/// Parsed job-requirement profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequirementProfile {
    pub must_have: Vec<SkillRequirement>,
    pub nice_to_have: Vec<SkillRequirement>,
    pub formula: ScoringFormula,
}

impl RequirementProfile {
    /// Parses the raw job-requirements mapping.
    pub fn from_value(value: &Value) -> Result<Self, ScoringInputError> {
        let root = value.as_object().ok_or(ScoringInputError::NotAnObject {
            field: "job_requirements",
            got: json_type_name(value),
        })?;

        let must_have = parse_requirement_list(root, "requirements_must_have")?;
        let nice_to_have = parse_requirement_list(root, "requirements_nice_to_have")?;
        let formula = parse_formula(root)?;

        Ok(Self {
            must_have,
            nice_to_have,
            formula,
        })
    }
}

fn parse_requirement_list(
    root: &Map<String, Value>,
    field: &'static str,
) -> Result<Vec<SkillRequirement>, ScoringInputError> {
    let Some(raw) = root.get(field) else {
        return Ok(Vec::new());
    };
    let entries = raw.as_array().ok_or(ScoringInputError::NotAnArray(field))?;

    let mut requirements = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let entry = entry
            .as_object()
            .ok_or(ScoringInputError::EntryNotAnObject(field, index))?;

        let skill = entry
            .get("skill")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let level = entry.get("level").and_then(Value::as_str).map(String::from);
        let weight = match entry.get("weight") {
            None => 1.0,
            Some(raw_weight) => raw_weight.as_f64().ok_or_else(|| {
                ScoringInputError::NotANumber(format!("{field}[{index}].weight"))
            })?,
        };

        requirements.push(SkillRequirement {
            skill,
            level,
            weight,
        });
    }
    Ok(requirements)
}

fn parse_formula(root: &Map<String, Value>) -> Result<ScoringFormula, ScoringInputError> {
    let Some(raw) = root.get("scoring_formula") else {
        debug!("scoring_formula absent, using defaults");
        return Ok(ScoringFormula::default());
    };
    let formula = raw.as_object().ok_or(ScoringInputError::NotAnObject {
        field: "scoring_formula",
        got: json_type_name(raw),
    })?;

    let defaults = ScoringFormula::default();
    Ok(ScoringFormula {
        must_have_weight: weight_field(formula, "must_have_weight", defaults.must_have_weight)?,
        nice_to_have_weight: weight_field(
            formula,
            "nice_to_have_weight",
            defaults.nice_to_have_weight,
        )?,
    })
}

fn weight_field(
    formula: &Map<String, Value>,
    key: &'static str,
    default: f64,
) -> Result<f64, ScoringInputError> {
    match formula.get(key) {
        None => Ok(default),
        Some(raw) => raw
            .as_f64()
            .ok_or_else(|| ScoringInputError::NotANumber(format!("scoring_formula.{key}"))),
    }
}
