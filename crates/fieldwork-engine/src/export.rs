//! Export document assembly.
//!
//! Joins each response to its catalog question and bundles session metadata
//! with summary statistics into the JSON document shape the downstream
//! analysis tooling expects.

use serde::Serialize;
use ts_rs::TS;

use fieldwork_catalog::Catalog;
use fieldwork_core::models::session::{Session, SessionStatus};

use crate::progress;
use crate::responses::ResponseStore;

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportDocument {
    pub session_info: SessionInfo,
    pub responses: Vec<ExportedResponse>,
    pub summary: ExportSummary,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionInfo {
    pub id: String,
    pub platform_name: String,
    pub employment_type: String,
    pub interview_code: String,
    pub interview_date: String,
    pub interviewer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interviewer_email: Option<String>,
    pub status: SessionStatus,
    pub start_time: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<jiff::Timestamp>,
    pub last_updated: jiff::Timestamp,
    /// Milliseconds from start to end (or to the last mutation while the
    /// interview is still open).
    pub duration: i64,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportedResponse {
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    pub answer: String,
    pub timestamp: jiff::Timestamp,
}

#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExportSummary {
    pub total_questions: usize,
    pub answered_questions: usize,
    pub completed_categories: usize,
    pub completion_percentage: f64,
}

pub fn export_session(
    catalog: &Catalog,
    session: &Session,
    store: &ResponseStore,
) -> ExportDocument {
    let end = session.end_time.unwrap_or(session.last_updated);
    let duration = end.as_millisecond() - session.start_time.as_millisecond();

    let responses = store
        .in_catalog_order(catalog)
        .into_iter()
        .map(|r| {
            let question = catalog.question(&r.question_id);
            ExportedResponse {
                question_id: r.question_id,
                category: question.map(|q| q.category_name.clone()),
                question: question.map(|q| q.text.clone()),
                answer: r.answer,
                timestamp: r.timestamp,
            }
        })
        .collect();

    let stats = progress::overall_statistics(catalog, store, &session.completed_categories);

    ExportDocument {
        session_info: SessionInfo {
            id: session.id.clone(),
            platform_name: session.platform_name.clone(),
            employment_type: session.employment_type.clone(),
            interview_code: session.interview_code.clone(),
            interview_date: session.interview_date.clone(),
            interviewer: session.interviewer.clone(),
            interviewer_email: session.interviewer_email.clone(),
            status: session.status,
            start_time: session.start_time,
            end_time: session.end_time,
            last_updated: session.last_updated,
            duration,
        },
        responses,
        summary: ExportSummary {
            total_questions: stats.total_questions,
            answered_questions: stats.answered_questions,
            completed_categories: stats.completed_categories,
            completion_percentage: stats.completion_percentage,
        },
    }
}
