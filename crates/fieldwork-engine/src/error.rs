use fieldwork_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("question not found: {0}")]
    QuestionNotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("category {code} has unaddressed questions ({addressed}/{total})")]
    CategoryIncomplete {
        code: String,
        addressed: usize,
        total: usize,
    },

    #[error("session is completed and can no longer be edited")]
    SessionCompleted,

    #[error("answer to {question_id} rejected: {reason}")]
    Rejected { question_id: String, reason: String },

    #[error(transparent)]
    Persistence(#[from] StorageError),
}
