//! Completion status, derived on demand from the response store and the
//! catalog. Pure reads — nothing in here can fail.

use serde::Serialize;
use ts_rs::TS;

use fieldwork_catalog::Catalog;
use fieldwork_core::models::response::Response;

use crate::responses::ResponseStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionStatus {
    Unanswered,
    Skipped,
    Answered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum CategoryStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Fine-grained per-category read used for display.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryProgress {
    pub total: usize,
    pub answered: usize,
    pub skipped: usize,
    /// Questions addressed either way.
    pub completed: usize,
    pub percentage: f64,
    /// True when every question carries the bulk-skip `"N/A"` sentinel, so
    /// presentation can show "skipped" instead of a completion ratio.
    pub bulk_skipped: bool,
}

#[derive(Debug, Clone, Copy, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OverallStatistics {
    pub total_questions: usize,
    /// Excludes the `"SKIPPED"` sentinel.
    pub answered_questions: usize,
    pub skipped_questions: usize,
    pub unanswered_questions: usize,
    /// Counts both answered and skipped toward the numerator.
    pub completion_percentage: f64,
    pub completed_categories: usize,
    pub total_categories: usize,
}

fn status_of(response: Option<&Response>) -> QuestionStatus {
    match response {
        None => QuestionStatus::Unanswered,
        Some(r) if r.is_blank() => QuestionStatus::Unanswered,
        Some(r) if r.is_skipped() => QuestionStatus::Skipped,
        Some(_) => QuestionStatus::Answered,
    }
}

pub fn question_status(store: &ResponseStore, question_id: &str) -> QuestionStatus {
    status_of(store.get(question_id))
}

pub fn category_status(catalog: &Catalog, store: &ResponseStore, code: &str) -> CategoryStatus {
    let progress = category_progress(catalog, store, code);
    if progress.completed == 0 {
        CategoryStatus::NotStarted
    } else if progress.completed == progress.total {
        CategoryStatus::Completed
    } else {
        CategoryStatus::InProgress
    }
}

pub fn category_progress(catalog: &Catalog, store: &ResponseStore, code: &str) -> CategoryProgress {
    let questions = catalog.questions_in(code);
    let total = questions.len();

    let mut answered = 0;
    let mut skipped = 0;
    let mut not_applicable = 0;
    for question in &questions {
        match question_status(store, &question.id) {
            QuestionStatus::Answered => answered += 1,
            QuestionStatus::Skipped => skipped += 1,
            QuestionStatus::Unanswered => {}
        }
        if store.get(&question.id).is_some_and(Response::is_not_applicable) {
            not_applicable += 1;
        }
    }

    let completed = answered + skipped;
    CategoryProgress {
        total,
        answered,
        skipped,
        completed,
        // An empty category is 0%, never a division by zero.
        percentage: if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        },
        bulk_skipped: total > 0 && not_applicable == total,
    }
}

pub fn overall_statistics(
    catalog: &Catalog,
    store: &ResponseStore,
    completed_categories: &[String],
) -> OverallStatistics {
    let total_questions = catalog.questions().len();

    let mut answered = 0;
    let mut skipped = 0;
    for question in catalog.questions() {
        match question_status(store, &question.id) {
            QuestionStatus::Answered => answered += 1,
            QuestionStatus::Skipped => skipped += 1,
            QuestionStatus::Unanswered => {}
        }
    }

    OverallStatistics {
        total_questions,
        answered_questions: answered,
        skipped_questions: skipped,
        unanswered_questions: total_questions - answered - skipped,
        completion_percentage: if total_questions > 0 {
            (answered + skipped) as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        },
        completed_categories: completed_categories.len(),
        total_categories: catalog.categories().len(),
    }
}
