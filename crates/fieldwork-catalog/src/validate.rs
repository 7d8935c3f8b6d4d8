//! Answer validation.
//!
//! Pure functions: given a question definition and a candidate answer,
//! decide acceptability. Rejections are structured values, never errors —
//! callers reprompt the interviewer with the reason.

use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

use fieldwork_core::models::question::{InputType, Question};
use fieldwork_core::models::response::SKIPPED;

/// The literal choice value that opens a free-text field.
pub const OTHER: &str = "Other";

/// Prefix encoding a filled-in "Other" answer, e.g. `"Other: cash in hand"`.
pub const OTHER_PREFIX: &str = "Other: ";

/// A structured rejection with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS, Error)]
#[error("{reason}")]
#[ts(export)]
pub struct RejectedAnswer {
    pub reason: String,
}

impl RejectedAnswer {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Extract the free text from an `"Other: <text>"` answer.
/// Returns `None` if the answer doesn't carry the prefix.
pub fn parse_other(answer: &str) -> Option<&str> {
    answer.strip_prefix(OTHER_PREFIX).map(str::trim)
}

/// Serialize a filled-in "Other" choice to the legacy prefix format.
pub fn encode_other(free_text: &str) -> String {
    format!("{OTHER_PREFIX}{}", free_text.trim())
}

/// Validate `answer` against `question`'s input type.
///
/// The `"SKIPPED"` sentinel is always accepted; a bare `"Other"` on a
/// single-choice question is accepted as valid-but-incomplete while the
/// free-text suffix is pending entry.
pub fn validate_answer(question: &Question, answer: &str) -> Result<(), RejectedAnswer> {
    if answer.trim().is_empty() {
        return Err(RejectedAnswer::new("Answer is required"));
    }

    if answer == SKIPPED {
        return Ok(());
    }

    match question.input_type {
        InputType::SingleChoice => {
            if let Some(other_text) = parse_other(answer) {
                if other_text.is_empty() {
                    return Err(RejectedAnswer::new("Please specify the 'Other' option"));
                }
            } else if answer != OTHER
                && !question
                    .choices
                    .as_deref()
                    .is_some_and(|choices| choices.iter().any(|c| c == answer))
            {
                return Err(RejectedAnswer::new("Please select a valid option"));
            }
        }
        InputType::YesNo => {
            if answer != "Yes" && answer != "No" {
                return Err(RejectedAnswer::new("Please select Yes or No"));
            }
        }
        InputType::Numeric => {
            let parsed = answer.trim().parse::<f64>();
            if !parsed.map(|n| n.is_finite()).unwrap_or(false) {
                return Err(RejectedAnswer::new("Please enter a valid number"));
            }
        }
        InputType::Date => {
            if answer.trim().parse::<jiff::civil::Date>().is_err() {
                return Err(RejectedAnswer::new("Please enter a valid date"));
            }
        }
        InputType::FreeText | InputType::LongText => {
            // Non-empty after trimming, already checked above.
        }
    }

    Ok(())
}
