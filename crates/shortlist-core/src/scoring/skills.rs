//! Skill matching: normalization, synonym expansion, and a partial-match
//! fallback.
//!
//! Every comparison runs on canonical tokens: lower-cased with whitespace
//! and the `.` `-` `_` separators removed, so "Node.js", "node js" and
//! "NodeJS" all collapse to "nodejs". Normalizing both sides makes matching
//! symmetric between requirement and candidate spellings.

use std::sync::LazyLock;

// ────────────────────────────────────────────────────────────────────────────
// Synonym table
// ────────────────────────────────────────────────────────────────────────────

/// Canonical concept and the surface spellings seen in CVs and job ads.
/// Variants are stored raw; normalization applies when the table is loaded.
const SYNONYM_GROUPS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "javascript", "ecmascript", "node", "nodejs"]),
    ("python", &["python", "python3", "py"]),
    ("react", &["react", "reactjs", "react.js"]),
    ("sql", &["sql", "mysql", "postgresql", "postgres", "sqlite"]),
    ("css", &["css", "css3", "styling"]),
    ("html", &["html", "html5", "markup"]),
    ("java", &["java", "jdk", "jvm"]),
    ("csharp", &["c#", "csharp", "dotnet", ".net"]),
    ("typescript", &["typescript", "ts"]),
    ("angular", &["angular", "angularjs"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("docker", &["docker", "containerization"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("aws", &["aws", "amazon web services"]),
    ("git", &["git", "github", "gitlab", "version control"]),
];

static NORMALIZED_GROUPS: LazyLock<Vec<Vec<String>>> = LazyLock::new(|| {
    SYNONYM_GROUPS
        .iter()
        .map(|(_, variants)| variants.iter().map(|v| normalize_skill(v)).collect())
        .collect()
});

/// Minimum normalized length for the generic substring fallback.
const PARTIAL_MATCH_MIN_LEN: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Canonical token for a skill name: lower-cased, with whitespace and the
/// usual separator characters removed.
pub fn normalize_skill(skill: &str) -> String {
    skill
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '.' | '-' | '_'))
        .collect()
}

/// The normalized skill plus every variant of any synonym group it overlaps
/// (substring containment in either direction).
fn variation_set(required: &str) -> Vec<String> {
    let mut variations = vec![required.to_string()];
    for group in NORMALIZED_GROUPS.iter() {
        let overlaps = group
            .iter()
            .any(|variant| variant.contains(required) || required.contains(variant.as_str()));
        if overlaps {
            variations.extend(group.iter().cloned());
        }
    }
    variations
}

/// Whether a required skill is covered by any of the candidate's skills.
///
/// Per candidate skill, two rules apply in order:
/// 1. some variation of the requirement contains, or is contained in, the
///    candidate token;
/// 2. fallback: both tokens are at least 4 chars and one contains the other.
pub fn matches(required_skill: &str, candidate_skills: &[String]) -> bool {
    let required = normalize_skill(required_skill);
    let variations = variation_set(&required);
    let required_len = required.chars().count();

    for candidate_skill in candidate_skills {
        let candidate = normalize_skill(candidate_skill);

        if variations
            .iter()
            .any(|variant| candidate.contains(variant.as_str()) || variant.contains(&candidate))
        {
            return true;
        }

        if required_len >= PARTIAL_MATCH_MIN_LEN
            && candidate.chars().count() >= PARTIAL_MATCH_MIN_LEN
            && (candidate.contains(&required) || required.contains(&candidate))
        {
            return true;
        }
    }

    false
}
