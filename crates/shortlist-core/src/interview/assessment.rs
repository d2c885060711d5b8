//! Post-interview soft-skill aggregation.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::scoring::round1;

/// The six soft-skill dimensions scored per interview question.
pub const ASSESSMENT_DIMENSIONS: &[&str] = &[
    "emotional_intelligence",
    "adaptability",
    "problem_solving",
    "learning_mindset",
    "teamwork",
    "self_awareness",
];

/// Score attached to every default dimension when no numeric assessments
/// were collected at all.
const BASELINE_SCORE: f64 = 1.0;

/// Aggregated outcome of a completed interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub completed_at: DateTime<Utc>,
    pub questions_analyzed: usize,
    pub overall_assessment: BTreeMap<String, f64>,
}

/// Folds per-question analysis payloads into one overall assessment.
///
/// Each payload is expected to carry numeric dimension scores under
/// `analysis.soft_skills_assessment`; payloads without that shape are
/// skipped. Every dimension seen anywhere averages across the answers that
/// scored it, rounded to one decimal. With nothing usable collected, all
/// default dimensions get the baseline instead.
pub fn aggregate_assessments(analyses: &[Value]) -> InterviewSummary {
    let mut collected: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for analysis in analyses {
        let Some(assessment) = analysis
            .get("analysis")
            .and_then(|a| a.get("soft_skills_assessment"))
            .and_then(Value::as_object)
        else {
            continue;
        };
        for (dimension, score) in assessment {
            if let Some(score) = score.as_f64() {
                collected.entry(dimension.clone()).or_default().push(score);
            }
        }
    }

    let overall_assessment: BTreeMap<String, f64> = if collected.is_empty() {
        debug!("no soft-skill scores collected, applying baseline");
        ASSESSMENT_DIMENSIONS
            .iter()
            .map(|dimension| (dimension.to_string(), BASELINE_SCORE))
            .collect()
    } else {
        collected
            .into_iter()
            .map(|(dimension, scores)| {
                let mean = scores.iter().sum::<f64>() / scores.len() as f64;
                (dimension, round1(mean))
            })
            .collect()
    };

    InterviewSummary {
        completed_at: Utc::now(),
        questions_analyzed: analyses.len(),
        overall_assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_analysis(scores: &[(&str, f64)]) -> Value {
        let mut assessment = serde_json::Map::new();
        for (dimension, score) in scores {
            assessment.insert(dimension.to_string(), json!(score));
        }
        json!({ "analysis": { "soft_skills_assessment": assessment } })
    }

    #[test]
    fn test_dimensions_average_across_answers() {
        let analyses = vec![
            make_analysis(&[("teamwork", 6.0), ("adaptability", 4.0)]),
            make_analysis(&[("teamwork", 7.0)]),
        ];
        let summary = aggregate_assessments(&analyses);
        assert_eq!(summary.questions_analyzed, 2);
        assert_eq!(summary.overall_assessment["teamwork"], 6.5);
        assert_eq!(summary.overall_assessment["adaptability"], 4.0);
    }

    #[test]
    fn test_means_round_to_one_decimal() {
        let analyses = vec![
            make_analysis(&[("problem_solving", 7.0)]),
            make_analysis(&[("problem_solving", 8.0)]),
            make_analysis(&[("problem_solving", 8.0)]),
        ];
        let summary = aggregate_assessments(&analyses);
        // 23 / 3 = 7.666...
        assert_eq!(summary.overall_assessment["problem_solving"], 7.7);
    }

    #[test]
    fn test_malformed_payloads_are_skipped() {
        let analyses = vec![
            json!({ "analysis": "transcription failed" }),
            json!({ "something_else": 1 }),
            make_analysis(&[("teamwork", 5.0)]),
            json!({ "analysis": { "soft_skills_assessment": { "teamwork": "high" } } }),
        ];
        let summary = aggregate_assessments(&analyses);
        assert_eq!(summary.questions_analyzed, 4);
        assert_eq!(summary.overall_assessment["teamwork"], 5.0);
    }

    #[test]
    fn test_baseline_when_nothing_collected() {
        let analyses = vec![json!({ "analysis": null }), json!({})];
        let summary = aggregate_assessments(&analyses);
        assert_eq!(summary.overall_assessment.len(), ASSESSMENT_DIMENSIONS.len());
        for dimension in ASSESSMENT_DIMENSIONS {
            assert_eq!(summary.overall_assessment[*dimension], 1.0);
        }
    }

    #[test]
    fn test_baseline_on_empty_input() {
        let summary = aggregate_assessments(&[]);
        assert_eq!(summary.questions_analyzed, 0);
        assert_eq!(summary.overall_assessment["self_awareness"], 1.0);
    }

    #[test]
    fn test_unknown_dimensions_are_kept() {
        let analyses = vec![make_analysis(&[("curiosity", 9.0)])];
        let summary = aggregate_assessments(&analyses);
        assert_eq!(summary.overall_assessment["curiosity"], 9.0);
        // Defaults only apply when nothing was collected.
        assert!(!summary.overall_assessment.contains_key("teamwork"));
    }
}
