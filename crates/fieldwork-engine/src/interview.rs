//! The orchestrator.
//!
//! [`Interview`] owns one session end to end: the metadata, the response
//! store, the navigator, and the persistence handle. Presentation layers
//! call the operations here and render the state they read back; no
//! operation in this module performs UI work.
//!
//! Every mutation stamps `last_updated` and schedules a debounced save.
//! Persistence failures never roll back in-memory state.

use std::sync::Arc;

use fieldwork_catalog::Catalog;
use fieldwork_catalog::validate::validate_answer;
use fieldwork_core::models::question::{Category, Question};
use fieldwork_core::models::response::{NOT_APPLICABLE, SKIPPED};
use fieldwork_core::models::session::{Session, SessionRecord, SessionStatus};
use fieldwork_storage::{NewSession, SessionStore};

use crate::autosave::Autosaver;
use crate::error::SurveyError;
use crate::export::{self, ExportDocument};
use crate::navigation::Navigator;
use crate::progress::{self, CategoryProgress, CategoryStatus, OverallStatistics, QuestionStatus};
use crate::responses::ResponseStore;

pub struct Interview {
    catalog: Arc<Catalog>,
    session: Session,
    responses: ResponseStore,
    navigator: Navigator,
    autosaver: Autosaver,
}

impl Interview {
    /// Start a fresh session from setup metadata and make it the active one.
    pub async fn create(
        catalog: Arc<Catalog>,
        store: Arc<dyn SessionStore>,
        new: NewSession,
    ) -> Result<Self, SurveyError> {
        let record = store.create_session(new).await?;
        store.set_active(&record.session.id).await?;
        Ok(Self::from_record(catalog, store, record))
    }

    /// Reopen a persisted session, reconciling its responses with the store
    /// and seating the navigator where the interview left off.
    pub async fn resume(
        catalog: Arc<Catalog>,
        store: Arc<dyn SessionStore>,
        session_id: &str,
    ) -> Result<Self, SurveyError> {
        let record = store.load_session(session_id).await?;
        store.set_active(&record.session.id).await?;
        Ok(Self::from_record(catalog, store, record))
    }

    pub fn from_record(
        catalog: Arc<Catalog>,
        store: Arc<dyn SessionStore>,
        record: SessionRecord,
    ) -> Self {
        let responses: ResponseStore = record.responses.into_iter().collect();
        let mut navigator = Navigator::new();
        navigator.resume(&catalog, &responses);
        Self {
            catalog,
            session: record.session,
            responses,
            navigator,
            autosaver: Autosaver::new(store),
        }
    }

    /// Flip a fresh session to in-progress and stamp its start time.
    pub fn begin(&mut self) {
        if self.session.status == SessionStatus::NotStarted {
            let now = jiff::Timestamp::now();
            self.session.status = SessionStatus::InProgress;
            self.session.start_time = now;
            self.session.touch(now);
            tracing::info!(id = %self.session.id, "interview started");
            self.schedule_save();
        }
    }

    fn ensure_editable(&self) -> Result<(), SurveyError> {
        if self.session.is_completed() {
            Err(SurveyError::SessionCompleted)
        } else {
            Ok(())
        }
    }

    /// Validate and record an answer. The `"SKIPPED"` sentinel bypasses
    /// validation (the explicit escape hatch); everything else must pass
    /// the question's input-type rules.
    pub fn answer_question(&mut self, question_id: &str, answer: &str) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| SurveyError::QuestionNotFound(question_id.to_string()))?;

        if answer != SKIPPED {
            validate_answer(question, answer).map_err(|rejected| SurveyError::Rejected {
                question_id: question_id.to_string(),
                reason: rejected.reason,
            })?;
        }

        let category_code = question.category_code.clone();
        self.record_answer(question_id, answer, &category_code);
        Ok(())
    }

    /// Record the explicit-skip sentinel for one question.
    pub fn skip_question(&mut self, question_id: &str) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        let question = self
            .catalog
            .question(question_id)
            .ok_or_else(|| SurveyError::QuestionNotFound(question_id.to_string()))?;
        let category_code = question.category_code.clone();
        self.record_answer(question_id, SKIPPED, &category_code);
        Ok(())
    }

    fn record_answer(&mut self, question_id: &str, answer: &str, category_code: &str) {
        let now = jiff::Timestamp::now();
        self.responses.upsert(question_id, answer, now);
        self.mirror_basic_info(question_id, answer);

        if progress::category_status(&self.catalog, &self.responses, category_code)
            == CategoryStatus::Completed
        {
            self.session.mark_category_completed(category_code);
            self.check_overall_completion(now);
        }

        self.session.touch(now);
        self.schedule_save();
    }

    /// The three Basic Information answers double as session metadata.
    fn mirror_basic_info(&mut self, question_id: &str, answer: &str) {
        match question_id {
            "BI_01" => self.session.platform_name = answer.trim().to_string(),
            "BI_02" => self.session.employment_type = answer.trim().to_string(),
            "BI_03" => self.session.interview_code = answer.trim().to_string(),
            _ => {}
        }
    }

    /// Bulk-skip: overwrite every response in the category with `"N/A"` and
    /// mark the category completed.
    pub fn skip_category(&mut self, category_code: &str) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        let category = self
            .catalog
            .category(category_code)
            .ok_or_else(|| SurveyError::CategoryNotFound(category_code.to_string()))?;
        let code = category.code.clone();

        let now = jiff::Timestamp::now();
        let question_ids: Vec<String> = self
            .catalog
            .questions_in(&code)
            .iter()
            .map(|q| q.id.clone())
            .collect();
        for question_id in question_ids {
            self.responses.upsert(question_id, NOT_APPLICABLE, now);
        }

        self.session.mark_category_completed(&code);
        self.check_overall_completion(now);
        self.session.touch(now);
        tracing::info!(id = %self.session.id, category = %code, "category bulk-skipped");
        self.schedule_save();
        Ok(())
    }

    /// Mark a category completed. Refused while the progress tracker still
    /// sees unaddressed questions — surface that to the interviewer instead.
    pub fn complete_category(&mut self, category_code: &str) -> Result<(), SurveyError> {
        self.ensure_editable()?;
        if self.catalog.category(category_code).is_none() {
            return Err(SurveyError::CategoryNotFound(category_code.to_string()));
        }

        let p = progress::category_progress(&self.catalog, &self.responses, category_code);
        if p.completed < p.total {
            return Err(SurveyError::CategoryIncomplete {
                code: category_code.to_string(),
                addressed: p.completed,
                total: p.total,
            });
        }

        let now = jiff::Timestamp::now();
        self.session.mark_category_completed(category_code);
        self.check_overall_completion(now);
        self.session.touch(now);
        self.schedule_save();
        Ok(())
    }

    fn check_overall_completion(&mut self, now: jiff::Timestamp) {
        let all_covered = self
            .catalog
            .categories()
            .iter()
            .all(|c| self.session.completed_categories.iter().any(|cc| *cc == c.code));

        if all_covered && !self.session.is_completed() {
            self.session.status = SessionStatus::Completed;
            self.session.end_time = Some(now);
            tracing::info!(id = %self.session.id, "interview completed");
        }
    }

    // Navigation passthroughs. Position changes are not data mutations:
    // they update the recorded index but don't trigger a save on their own.

    pub fn next_question(&mut self) -> bool {
        let moved = self.navigator.next_question(&self.catalog);
        self.sync_position();
        moved
    }

    pub fn previous_question(&mut self) -> bool {
        let moved = self.navigator.previous_question();
        self.sync_position();
        moved
    }

    pub fn jump_to_question(&mut self, index: usize) -> bool {
        let moved = self.navigator.jump_to_question(&self.catalog, index);
        self.sync_position();
        moved
    }

    pub fn move_to_next_category(&mut self) -> bool {
        let moved = self.navigator.next_category(&self.catalog);
        self.sync_position();
        moved
    }

    pub fn move_to_previous_category(&mut self) -> bool {
        let moved = self.navigator.previous_category();
        self.sync_position();
        moved
    }

    pub fn jump_to_category(&mut self, code: &str) -> bool {
        let moved = self.navigator.jump_to_category(&self.catalog, code);
        self.sync_position();
        moved
    }

    fn sync_position(&mut self) {
        self.session.current_question_index = self.navigator.question_index();
    }

    pub fn position(&self) -> (usize, usize) {
        self.navigator.position()
    }

    pub fn current_category(&self) -> Option<&Category> {
        self.navigator.current_category(&self.catalog)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.navigator.current_question(&self.catalog)
    }

    // Progress reads.

    pub fn question_status(&self, question_id: &str) -> QuestionStatus {
        progress::question_status(&self.responses, question_id)
    }

    pub fn category_status(&self, category_code: &str) -> CategoryStatus {
        progress::category_status(&self.catalog, &self.responses, category_code)
    }

    pub fn category_progress(&self, category_code: &str) -> CategoryProgress {
        progress::category_progress(&self.catalog, &self.responses, category_code)
    }

    pub fn statistics(&self) -> OverallStatistics {
        progress::overall_statistics(
            &self.catalog,
            &self.responses,
            &self.session.completed_categories,
        )
    }

    /// The export document: responses joined to their questions, plus
    /// metadata and summary statistics.
    pub fn export(&self) -> ExportDocument {
        export::export_session(&self.catalog, &self.session, &self.responses)
    }

    /// Write the current state immediately, bypassing the debounce.
    pub async fn save_now(&mut self) -> Result<(), SurveyError> {
        let record = self.record();
        self.autosaver.flush(&record).await?;
        Ok(())
    }

    /// The persistable snapshot of the current state.
    pub fn record(&self) -> SessionRecord {
        let mut session = self.session.clone();
        session.current_question_index = self.navigator.question_index();
        SessionRecord {
            session,
            responses: self.responses.in_catalog_order(&self.catalog),
        }
    }

    fn schedule_save(&mut self) {
        let record = self.record();
        self.autosaver.schedule(record);
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The most recent persistence attempt failed; the interviewer should
    /// see an "unsaved changes" indicator.
    pub fn last_save_failed(&self) -> bool {
        self.autosaver.last_save_failed()
    }

    pub fn has_pending_save(&self) -> bool {
        self.autosaver.is_pending()
    }
}
