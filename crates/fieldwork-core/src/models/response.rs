use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::timestamp_compat;

/// Reserved answer marking an explicitly skipped question.
pub const SKIPPED: &str = "SKIPPED";

/// Reserved answer written to every question of a bulk-skipped category.
pub const NOT_APPLICABLE: &str = "N/A";

/// One recorded answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Response {
    pub question_id: String,
    pub answer: String,
    #[serde(deserialize_with = "timestamp_compat::deserialize")]
    pub timestamp: jiff::Timestamp,
}

impl Response {
    pub fn new(
        question_id: impl Into<String>,
        answer: impl Into<String>,
        timestamp: jiff::Timestamp,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
            timestamp,
        }
    }

    /// Trim the id and answer. Persisted data occasionally carries stray
    /// whitespace from the original free-form inputs.
    pub fn sanitized(mut self) -> Self {
        self.question_id = self.question_id.trim().to_string();
        self.answer = self.answer.trim().to_string();
        self
    }

    pub fn is_skipped(&self) -> bool {
        self.answer == SKIPPED
    }

    pub fn is_not_applicable(&self) -> bool {
        self.answer == NOT_APPLICABLE
    }

    /// Blank after trimming — treated the same as no response at all.
    pub fn is_blank(&self) -> bool {
        self.answer.trim().is_empty()
    }

    /// A substantive answer: non-blank and not an explicit-skip sentinel.
    /// Bulk-skip `"N/A"` entries count as addressed, not skipped.
    pub fn is_answered(&self) -> bool {
        !self.is_blank() && !self.is_skipped()
    }
}
