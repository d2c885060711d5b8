//! Reconciles recruiter formula weights into per-component weights.

use crate::requirements::ScoringFormula;

/// Floor on the weight remainder left for experience and education.
const OTHER_WEIGHT_FLOOR: f64 = 0.15;
/// Split of that remainder: 60% experience, 40% education.
const EXPERIENCE_SHARE: f64 = 0.6;
const EDUCATION_SHARE: f64 = 0.4;

/// Per-component weights applied to the composite score.
///
/// Not renormalized: depending on the formula the components may sum above
/// or below 1.0, and the composite keeps that scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentWeights {
    pub must_have: f64,
    pub nice_to_have: f64,
    pub experience: f64,
    pub education: f64,
}

impl ComponentWeights {
    /// Derives component weights from a recruiter formula. Whatever weight
    /// the formula leaves unclaimed (floored at 0.15) splits 60/40 between
    /// experience and education.
    pub fn reconcile(formula: &ScoringFormula) -> Self {
        let other = (1.0 - formula.must_have_weight - formula.nice_to_have_weight)
            .max(OTHER_WEIGHT_FLOOR);
        Self {
            must_have: formula.must_have_weight,
            nice_to_have: formula.nice_to_have_weight,
            experience: other * EXPERIENCE_SHARE,
            education: other * EDUCATION_SHARE,
        }
    }
}
