use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::Response;
use super::timestamp_compat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SessionStatus {
    NotStarted,
    /// The remote API historically emitted both spellings.
    #[serde(alias = "in_progress")]
    InProgress,
    Completed,
}

/// One interview's state, minus the responses (those live in the response
/// store and join this on the wire as a [`SessionRecord`]).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    /// Opaque, generator-assigned, stable for the session's lifetime.
    pub id: String,
    pub interviewer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_email: Option<String>,
    pub interview_date: String,
    pub platform_name: String,
    pub employment_type: String,
    pub interview_code: String,
    pub status: SessionStatus,
    pub completed_categories: Vec<String>,
    #[serde(deserialize_with = "timestamp_compat::deserialize")]
    pub start_time: jiff::Timestamp,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp_compat::deserialize_opt"
    )]
    pub end_time: Option<jiff::Timestamp>,
    #[serde(deserialize_with = "timestamp_compat::deserialize")]
    pub last_updated: jiff::Timestamp,
    #[serde(default)]
    pub current_question_index: usize,
}

impl Session {
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Stamp a mutation. Every state change goes through here.
    pub fn touch(&mut self, now: jiff::Timestamp) {
        self.last_updated = now;
    }

    pub fn mark_category_completed(&mut self, code: &str) {
        if !self.completed_categories.iter().any(|c| c == code) {
            self.completed_categories.push(code.to_string());
        }
    }
}

/// The persisted JSON form: session metadata plus the full response set,
/// one document per session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionRecord {
    #[serde(flatten)]
    pub session: Session,
    #[serde(default)]
    pub responses: Vec<Response>,
}
