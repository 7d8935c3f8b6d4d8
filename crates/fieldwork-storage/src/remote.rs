//! Remote survey API backend.
//!
//! JSON over HTTP. The API keeps session metadata and responses as separate
//! resources, so a full save is one session PUT followed by one write per
//! answer (POST for a question's first response, PUT thereafter) — issued
//! sequentially so a response write can never race the session-metadata
//! write for the same session.

use std::collections::HashSet;
use std::time::Duration;

use fieldwork_core::models::question::{InputType, Question};
use fieldwork_core::models::response::Response;
use fieldwork_core::models::session::{Session, SessionRecord};
use serde::Deserialize;

use crate::error::StorageError;
use crate::store::{BoxFuture, NewSession, SessionStore};

/// No timeout was defined by the original service; 30 s is the client-side
/// default here.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    base_url: String,
}

/// Classify an HTTP failure status into the storage error taxonomy:
/// 401/403 → `Auth`, 404 → `NotFound`, 5xx → `Server`, anything else → `Api`.
pub fn classify_status(status: u16, id: Option<&str>) -> StorageError {
    match status {
        401 | 403 => StorageError::Auth { status },
        404 => StorageError::NotFound {
            id: id.unwrap_or_default().to_string(),
        },
        500..=599 => StorageError::Server { status },
        _ => StorageError::Api { status },
    }
}

/// A question as the API serves it: type as a legacy string, prompt under
/// the `question` key.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuestion {
    id: String,
    question: String,
    category: String,
    category_code: String,
    #[serde(rename = "type")]
    input_type: String,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    follow_up_to: Option<String>,
}

impl WireQuestion {
    /// Migrate to the canonical shape. `None` when the type string is one
    /// this build doesn't know, which the caller logs and drops.
    fn canonicalize(self) -> Option<Question> {
        let input_type = match InputType::from_legacy(&self.input_type) {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(id = %self.id, error = %e, "dropping question with unknown type");
                return None;
            }
        };
        Some(Question {
            id: self.id,
            text: self.question,
            category_name: self.category,
            category_code: self.category_code,
            input_type,
            choices: self.options,
            follow_up_of: self.follow_up_to,
        })
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsEnvelope {
    questions: Vec<WireQuestion>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SessionsEnvelope {
    sessions: Vec<Session>,
}

#[derive(Debug, Deserialize)]
struct ResponsesEnvelope {
    responses: Vec<Response>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireNextQuestion {
    #[serde(default)]
    question: Option<WireQuestion>,
    #[serde(default)]
    category_complete: bool,
    #[serde(default)]
    current_category: String,
    #[serde(default)]
    message: Option<String>,
}

/// Either the next unanswered question in catalog order, or a signal that
/// the current category is complete.
#[derive(Debug)]
pub struct NextQuestion {
    pub question: Option<Question>,
    pub category_complete: bool,
    pub current_category: String,
    pub message: Option<String>,
}

impl NextQuestion {
    fn from_wire(wire: WireNextQuestion) -> Self {
        Self {
            question: wire.question.and_then(WireQuestion::canonicalize),
            category_complete: wire.category_complete,
            current_category: wire.current_category,
            message: wire.message,
        }
    }
}

/// How one response reaches the server: first writes are POSTs, overwrites
/// are PUTs. The API keeps response records as distinct resources and
/// rejects a PUT for one that was never created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseWrite {
    Create,
    Update,
}

fn plan_response_writes<'r>(
    existing: &HashSet<String>,
    responses: &'r [Response],
) -> Vec<(ResponseWrite, &'r Response)> {
    responses
        .iter()
        .map(|r| {
            let kind = if existing.contains(&r.question_id) {
                ResponseWrite::Update
            } else {
                ResponseWrite::Create
            };
            (kind, r)
        })
        .collect()
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn check(
        response: reqwest::Response,
        id: Option<&str>,
    ) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(classify_status(status.as_u16(), id))
        }
    }

    /// `GET /questions` — the server-side catalog, migrated to the canonical
    /// question shape at load time.
    pub async fn fetch_questions(&self) -> Result<Vec<Question>, StorageError> {
        let response = self.client.get(self.url("/questions")).send().await?;
        let envelope: QuestionsEnvelope = Self::check(response, None).await?.json().await?;
        Ok(envelope
            .questions
            .into_iter()
            .filter_map(WireQuestion::canonicalize)
            .collect())
    }

    /// `GET /sessions/{id}/next-question`.
    pub async fn next_question(&self, session_id: &str) -> Result<NextQuestion, StorageError> {
        let response = self
            .client
            .get(self.url(&format!("/sessions/{session_id}/next-question")))
            .send()
            .await?;
        let wire: WireNextQuestion = Self::check(response, Some(session_id)).await?.json().await?;
        Ok(NextQuestion::from_wire(wire))
    }

    /// `POST /sessions/{id}/responses` — first write for a question.
    pub async fn create_response(
        &self,
        session_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<Response, StorageError> {
        let response = self
            .client
            .post(self.url(&format!("/sessions/{session_id}/responses")))
            .json(&serde_json::json!({ "questionId": question_id, "answer": answer }))
            .send()
            .await?;
        Ok(Self::check(response, Some(session_id)).await?.json().await?)
    }

    /// `PUT /sessions/{id}/responses/{questionId}` — overwrite for a question
    /// that already has a response record.
    pub async fn update_response(
        &self,
        session_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<Response, StorageError> {
        let response = self
            .client
            .put(self.url(&format!(
                "/sessions/{session_id}/responses/{question_id}"
            )))
            .json(&serde_json::json!({ "answer": answer }))
            .send()
            .await?;
        Ok(Self::check(response, Some(session_id)).await?.json().await?)
    }

    /// `POST /sessions/{id}/submit` — record an answer and let the backend
    /// drive the next-question decision.
    pub async fn submit_response(
        &self,
        session_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<Response, StorageError> {
        let response = self
            .client
            .post(self.url(&format!("/sessions/{session_id}/submit")))
            .json(&serde_json::json!({ "questionId": question_id, "answer": answer }))
            .send()
            .await?;
        Ok(Self::check(response, Some(session_id)).await?.json().await?)
    }

    /// Backend-driven variant of the answer loop: record the answer through
    /// the submit endpoint, then let the server decide what comes next —
    /// either the following question or a category-complete signal.
    pub async fn answer_and_advance(
        &self,
        session_id: &str,
        question_id: &str,
        answer: &str,
    ) -> Result<NextQuestion, StorageError> {
        self.submit_response(session_id, question_id, answer).await?;
        self.next_question(session_id).await
    }
}

impl SessionStore for RemoteStore {
    fn create_session(
        &self,
        new: NewSession,
    ) -> BoxFuture<'_, Result<SessionRecord, StorageError>> {
        Box::pin(async move {
            let body = serde_json::json!({
                "interviewer": new.interviewer,
                "interviewerEmail": new.interviewer_email.unwrap_or_default(),
                "interviewDate": new.interview_date,
                "platformName": new.platform_name,
                "employmentType": new.employment_type,
                "interviewCode": new.interview_code,
            });
            let response = self
                .client
                .post(self.url("/sessions"))
                .json(&body)
                .send()
                .await?;
            let session: Session = Self::check(response, None).await?.json().await?;
            tracing::debug!(id = %session.id, "session created remotely");
            Ok(SessionRecord {
                session,
                responses: Vec::new(),
            })
        })
    }

    fn load_session<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<SessionRecord, StorageError>> {
        Box::pin(async move {
            let response = self
                .client
                .get(self.url(&format!("/sessions/{id}")))
                .send()
                .await?;
            let session: Session = Self::check(response, Some(id)).await?.json().await?;

            let response = self
                .client
                .get(self.url(&format!("/sessions/{id}/responses")))
                .send()
                .await?;
            let envelope: ResponsesEnvelope =
                Self::check(response, Some(id)).await?.json().await?;

            Ok(SessionRecord {
                session,
                responses: envelope.responses,
            })
        })
    }

    fn save_session<'a>(
        &'a self,
        record: &'a SessionRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let id = &record.session.id;
            let response = self
                .client
                .put(self.url(&format!("/sessions/{id}")))
                .json(&record.session)
                .send()
                .await?;
            Self::check(response, Some(id)).await?;

            // The server only accepts PUT for a response record that exists,
            // so fetch the ids it already has and route the rest to POST.
            let response = self
                .client
                .get(self.url(&format!("/sessions/{id}/responses")))
                .send()
                .await?;
            let envelope: ResponsesEnvelope =
                Self::check(response, Some(id)).await?.json().await?;
            let existing: HashSet<String> = envelope
                .responses
                .into_iter()
                .map(|r| r.question_id)
                .collect();

            // Sequential on purpose: response writes must not race the
            // session-metadata write above.
            for (kind, r) in plan_response_writes(&existing, &record.responses) {
                match kind {
                    ResponseWrite::Create => {
                        self.create_response(id, &r.question_id, &r.answer).await?;
                    }
                    ResponseWrite::Update => {
                        self.update_response(id, &r.question_id, &r.answer).await?;
                    }
                }
            }
            Ok(())
        })
    }

    fn list_sessions(&self) -> BoxFuture<'_, Result<Vec<SessionRecord>, StorageError>> {
        Box::pin(async move {
            let response = self.client.get(self.url("/sessions")).send().await?;
            let envelope: SessionsEnvelope = Self::check(response, None).await?.json().await?;
            Ok(envelope
                .sessions
                .into_iter()
                .map(|session| SessionRecord {
                    session,
                    responses: Vec::new(),
                })
                .collect())
        })
    }

    // The active-session pointer is a device-local concept; the API has no
    // counterpart, so these are no-ops.

    fn set_active<'a>(&'a self, _id: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }

    fn active_session_id(&self) -> BoxFuture<'_, Result<Option<String>, StorageError>> {
        Box::pin(async { Ok(None) })
    }

    fn clear_active(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async { Ok(()) })
    }
}
