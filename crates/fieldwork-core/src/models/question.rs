use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// How an answer to a question is captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InputType {
    FreeText,
    LongText,
    Numeric,
    Date,
    SingleChoice,
    YesNo,
}

impl InputType {
    /// Map the ad-hoc type strings found in older catalog revisions and the
    /// remote API onto the canonical enum. Catalog data is migrated through
    /// this at load time instead of branching on field presence at use time.
    pub fn from_legacy(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "text" | "free_text" => Ok(Self::FreeText),
            "textarea" | "long_text" => Ok(Self::LongText),
            "number" | "numeric" => Ok(Self::Numeric),
            "date" => Ok(Self::Date),
            "dropdown" | "multiple_choice" | "multipleChoice" | "single_choice" => {
                Ok(Self::SingleChoice)
            }
            "yesno" | "yes_no" => Ok(Self::YesNo),
            other => Err(CoreError::UnknownInputType(other.to_string())),
        }
    }
}

/// An immutable catalog entry. Defined once at process start, shared by
/// reference, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Question {
    /// Conventionally `<CATEGORY>_<NUMBER>[letter]`, e.g. `PE_04a`. A letter
    /// suffix denotes a follow-up question.
    pub id: String,
    pub text: String,
    pub category_name: String,
    pub category_code: String,
    pub input_type: InputType,
    /// Present and non-empty iff `input_type` is `SingleChoice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Advisory linkage to a parent question. Does not constrain navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_of: Option<String>,
}

/// An ordered grouping of questions.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Category {
    pub code: String,
    pub display_name: String,
    /// Position in the fixed category sequence.
    pub ordinal: usize,
}
