//! Candidate scoring pipeline: skill matching, weight reconciliation,
//! composite scoring, and insight generation.

pub mod insights;
pub mod scorer;
pub mod skills;
pub mod weights;

/// Rounds to one decimal place, the precision scores ship with.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
