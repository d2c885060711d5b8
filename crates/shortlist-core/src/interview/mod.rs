//! Interview stage: invite issuance for qualified candidates and
//! post-interview soft-skill aggregation.

pub mod assessment;
pub mod invite;
