//! Candidate extraction from noisy upstream JSON.
//!
//! CV data reaches scoring in one of two shapes: the structured schema
//! (`technologies`, `soft_skills`, `experience_years`, `education`) or a
//! legacy shape nesting fields under `ai_extracted`. Each attribute resolves
//! through an ordered source list and the first usable value wins. Absent or
//! malformed values fall back to defaults rather than erroring; scoring must
//! run on whatever survived the upstream pipeline.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::ScoringInputError;
use crate::profile::{CandidateProfile, Education};

// ────────────────────────────────────────────────────────────────────────────
// Source tables
// ────────────────────────────────────────────────────────────────────────────

/// A lookup path into the raw CV mapping.
#[derive(Debug, Clone, Copy)]
enum Source {
    Key(&'static str),
    Nested(&'static str, &'static str),
}

const TECHNOLOGY_SOURCES: &[Source] = &[
    Source::Key("technologies"),
    Source::Nested("ai_extracted", "technologies"),
];

/// Legacy extractions often file soft skills under `languages`.
const SOFT_SKILL_SOURCES: &[Source] = &[
    Source::Key("soft_skills"),
    Source::Nested("ai_extracted", "languages"),
    Source::Key("languages"),
];

const EXPERIENCE_TEXT_SOURCES: &[Source] = &[
    Source::Nested("ai_extracted", "experience"),
    Source::Key("experience"),
];

const EDUCATION_TEXT_SOURCES: &[Source] = &[
    Source::Nested("ai_extracted", "education"),
    Source::Key("education"),
];

/// Case-insensitive markers of completed higher education in free text.
const HIGHER_EDUCATION_KEYWORDS: &[&str] = &[
    "university",
    "bachelor",
    "master",
    "degree",
    "phd",
    "msc",
    "bsc",
    "engineer",
];

static FIRST_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("experience regex"));

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

impl CandidateProfile {
    /// Extracts a profile from a raw CV mapping.
    ///
    /// Never fails: attributes that are absent or unusable default to empty
    /// lists, zero years, and `other` education.
    pub fn from_value(cv_data: &Value) -> Self {
        let technologies = first_string_list(cv_data, TECHNOLOGY_SOURCES);
        let soft_skills = first_string_list(cv_data, SOFT_SKILL_SOURCES);
        let experience_years = extract_experience_years(cv_data);
        let education = extract_education(cv_data);

        debug!(
            technologies = technologies.len(),
            soft_skills = soft_skills.len(),
            experience_years,
            ?education,
            "extracted candidate profile"
        );

        CandidateProfile {
            technologies,
            soft_skills,
            experience_years,
            education,
        }
    }

    /// Salvages the JSON payload from a raw assistant reply, then extracts.
    pub fn from_ai_text(text: &str) -> Result<Self, ScoringInputError> {
        let payload = extract_json_payload(text)?;
        Ok(Self::from_value(&payload))
    }
}

/// First source resolving to an array with at least one string entry.
/// Non-string entries are dropped; an array holding none falls through.
fn first_string_list(data: &Value, sources: &[Source]) -> Vec<String> {
    for source in sources {
        if let Some(items) = lookup(data, source).and_then(Value::as_array) {
            let strings: Vec<String> = items
                .iter()
                .filter_map(|item| item.as_str().map(String::from))
                .collect();
            if !strings.is_empty() {
                return strings;
            }
        }
    }
    Vec::new()
}

/// First source holding non-blank text. Bare numbers count as text, matching
/// extractions that put `"experience": 8` where a sentence was expected.
fn first_text(data: &Value, sources: &[Source]) -> Option<String> {
    for source in sources {
        match lookup(data, source) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn lookup<'a>(data: &'a Value, source: &Source) -> Option<&'a Value> {
    match source {
        Source::Key(key) => data.get(key),
        Source::Nested(outer, inner) => data.get(outer).and_then(|v| v.get(inner)),
    }
}

/// Years of experience, preferring the structured `experience_years` field.
///
/// A well-formed structured value always wins, even when it is `0`. Only when
/// the field is absent or unusable does the legacy free-text chain get
/// scanned for its first integer.
fn extract_experience_years(data: &Value) -> u32 {
    if let Some(value) = data.get("experience_years") {
        if let Some(years) = value.as_f64().filter(|y| *y >= 0.0) {
            return years as u32;
        }
        if let Some(years) = value.as_str().and_then(first_integer) {
            return years;
        }
        warn!(field = %value, "unusable experience_years, falling back to text sources");
    }

    first_text(data, EXPERIENCE_TEXT_SOURCES)
        .and_then(|text| first_integer(&text))
        .unwrap_or(0)
}

fn first_integer(text: &str) -> Option<u32> {
    FIRST_INTEGER
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Education bucket, preferring the structured `education` field.
///
/// An explicit `"higher"` or `"other"` always wins. Any other value drops to
/// the free-text chain, which looks for higher-education keywords.
fn extract_education(data: &Value) -> Education {
    if let Some(explicit) = data.get("education").and_then(Value::as_str) {
        match explicit {
            "higher" => return Education::Higher,
            "other" => return Education::Other,
            _ => {}
        }
    }

    match first_text(data, EDUCATION_TEXT_SOURCES) {
        Some(text) => {
            let lowered = text.to_lowercase();
            if HIGHER_EDUCATION_KEYWORDS
                .iter()
                .any(|keyword| lowered.contains(keyword))
            {
                Education::Higher
            } else {
                Education::Other
            }
        }
        None => Education::Other,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw-reply salvage
// ────────────────────────────────────────────────────────────────────────────

/// Pulls the JSON object out of a raw assistant reply.
///
/// Strips a ```` ```json ```` fence when a closing fence follows it, then
/// parses the slice from the first `{` through the last `}`.
pub fn extract_json_payload(text: &str) -> Result<Value, ScoringInputError> {
    let mut body = text;

    if let Some(fence) = body.find("```json") {
        let after = fence + "```json".len();
        if let Some(close) = body.rfind("```") {
            if close > after {
                warn!("stripping markdown fence from reply");
                body = &body[after..close];
            }
        }
    }

    let start = body.find('{').ok_or(ScoringInputError::NoJsonPayload)?;
    let end = body.rfind('}').ok_or(ScoringInputError::NoJsonPayload)?;
    if end < start {
        return Err(ScoringInputError::NoJsonPayload);
    }

    Ok(serde_json::from_str(body[start..=end].trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_structured_schema_wins_over_legacy() {
        let cv = json!({
            "technologies": ["Rust", "Python"],
            "ai_extracted": { "technologies": ["COBOL"] }
        });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.technologies, vec!["Rust", "Python"]);
    }

    #[test]
    fn test_legacy_nested_technologies() {
        let cv = json!({ "ai_extracted": { "technologies": ["React", "CSS"] } });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.technologies, vec!["React", "CSS"]);
    }

    #[test]
    fn test_empty_structured_list_falls_through() {
        let cv = json!({
            "technologies": [],
            "ai_extracted": { "technologies": ["Java"] }
        });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.technologies, vec!["Java"]);
    }

    #[test]
    fn test_non_string_entries_are_dropped() {
        let cv = json!({ "technologies": ["Go", 42, null, "SQL"] });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.technologies, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_all_non_string_list_falls_through_to_next_source() {
        let cv = json!({
            "technologies": [1, 2, 3],
            "ai_extracted": { "technologies": ["Kotlin"] }
        });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.technologies, vec!["Kotlin"]);
    }

    #[test]
    fn test_soft_skills_from_legacy_languages() {
        let cv = json!({ "languages": ["English", "German"] });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.soft_skills, vec!["English", "German"]);
    }

    #[test]
    fn test_soft_skills_prefer_nested_languages_over_top_level() {
        let cv = json!({
            "ai_extracted": { "languages": ["communication"] },
            "languages": ["Spanish"]
        });
        let profile = CandidateProfile::from_value(&cv);
        assert_eq!(profile.soft_skills, vec!["communication"]);
    }

    #[test]
    fn test_structured_experience_number() {
        let cv = json!({ "experience_years": 7 });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 7);
    }

    #[test]
    fn test_structured_experience_zero_is_kept() {
        // An explicit 0 must not trigger the free-text fallback.
        let cv = json!({ "experience_years": 0, "experience": "10 years at BigCo" });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 0);
    }

    #[test]
    fn test_fractional_years_truncate() {
        let cv = json!({ "experience_years": 3.9 });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 3);
    }

    #[test]
    fn test_experience_string_is_scanned() {
        let cv = json!({ "experience_years": "about 4 years" });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 4);
    }

    #[test]
    fn test_negative_years_fall_back_to_text() {
        let cv = json!({ "experience_years": -2, "experience": "6 years in QA" });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 6);
    }

    #[test]
    fn test_experience_from_legacy_text() {
        let cv = json!({ "ai_extracted": { "experience": "Worked 5 years as a backend dev" } });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 5);
    }

    #[test]
    fn test_experience_text_without_digits_scores_zero() {
        let cv = json!({ "experience": "extensive background in finance" });
        assert_eq!(CandidateProfile::from_value(&cv).experience_years, 0);
    }

    #[test]
    fn test_experience_defaults_to_zero() {
        assert_eq!(CandidateProfile::from_value(&json!({})).experience_years, 0);
    }

    #[test]
    fn test_explicit_education_tokens_win() {
        let cv = json!({ "education": "higher" });
        assert_eq!(CandidateProfile::from_value(&cv).education, Education::Higher);

        // An explicit "other" must not be upgraded by keyword inference.
        let cv = json!({ "education": "other", "ai_extracted": { "education": "MSc" } });
        assert_eq!(CandidateProfile::from_value(&cv).education, Education::Other);
    }

    #[test]
    fn test_education_inferred_from_keywords() {
        let cv = json!({ "education": "Master of Science, Warsaw University of Technology" });
        assert_eq!(CandidateProfile::from_value(&cv).education, Education::Higher);

        let cv = json!({ "ai_extracted": { "education": "BSc Computer Science" } });
        assert_eq!(CandidateProfile::from_value(&cv).education, Education::Higher);
    }

    #[test]
    fn test_education_without_keywords_is_other() {
        let cv = json!({ "education": "self-taught, bootcamp graduate" });
        assert_eq!(CandidateProfile::from_value(&cv).education, Education::Other);
    }

    #[test]
    fn test_education_defaults_to_other() {
        assert_eq!(CandidateProfile::from_value(&json!({})).education, Education::Other);
    }

    #[test]
    fn test_non_object_input_yields_default_profile() {
        assert_eq!(
            CandidateProfile::from_value(&json!("not an object")),
            CandidateProfile::default()
        );
        assert_eq!(
            CandidateProfile::from_value(&json!(null)),
            CandidateProfile::default()
        );
    }

    // ── raw-reply salvage ───────────────────────────────────────────────────

    #[test]
    fn test_payload_from_fenced_reply() {
        let reply = "Here you go:\n```json\n{\"technologies\": [\"Rust\"]}\n```\nanything else?";
        let payload = extract_json_payload(reply).unwrap();
        assert_eq!(payload["technologies"][0], "Rust");
    }

    #[test]
    fn test_payload_from_prose_wrapped_reply() {
        let reply = "Sure! {\"experience_years\": 2} Hope that helps.";
        let payload = extract_json_payload(reply).unwrap();
        assert_eq!(payload["experience_years"], 2);
    }

    #[test]
    fn test_unclosed_fence_still_parses() {
        let reply = "```json {\"a\": 1}";
        let payload = extract_json_payload(reply).unwrap();
        assert_eq!(payload["a"], 1);
    }

    #[test]
    fn test_reply_without_object_is_an_error() {
        let err = extract_json_payload("no json here").unwrap_err();
        assert!(matches!(err, ScoringInputError::NoJsonPayload));

        let err = extract_json_payload("} inverted {").unwrap_err();
        assert!(matches!(err, ScoringInputError::NoJsonPayload));
    }

    #[test]
    fn test_garbled_payload_is_an_error() {
        let err = extract_json_payload("{\"a\": }").unwrap_err();
        assert!(matches!(err, ScoringInputError::MalformedPayload(_)));
    }

    #[test]
    fn test_from_ai_text_extracts_profile() {
        let reply = "```json\n{\"technologies\": [\"Python\"], \"experience_years\": 3}\n```";
        let profile = CandidateProfile::from_ai_text(reply).unwrap();
        assert_eq!(profile.technologies, vec!["Python"]);
        assert_eq!(profile.experience_years, 3);
    }
}
