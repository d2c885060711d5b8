//! Interview invites for qualified candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::scoring::scorer::ScoreResult;

/// Invite lifecycle state. Issuance always starts at `pending`; the host
/// application owns the transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    #[default]
    Pending,
    Completed,
    Expired,
}

/// Invite attached to a qualifying score result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewInvite {
    pub interview_token: Uuid,
    pub interview_url: String,
    pub expires_at: Option<DateTime<Utc>>, // host sets a deadline if it wants one
    pub status: InviteStatus,
}

impl InterviewInvite {
    /// Issues an invite when the result qualifies and the application is
    /// known. Returns `None` otherwise; unqualified candidates get no token.
    pub fn issue_for(result: &ScoreResult, application_id: Option<&str>) -> Option<Self> {
        if !result.qualified_for_interview || application_id.is_none() {
            return None;
        }

        let interview_token = Uuid::new_v4();
        debug!(%interview_token, "issued interview invite");

        Some(Self {
            interview_url: format!("/ai-interview/{interview_token}"),
            interview_token,
            expires_at: None,
            status: InviteStatus::Pending,
        })
    }
}
