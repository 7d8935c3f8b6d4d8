#![allow(dead_code)] // not every test file uses every helper

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use fieldwork_catalog::Catalog;
use fieldwork_core::models::question::{InputType, Question};
use fieldwork_core::models::session::{Session, SessionRecord, SessionStatus};
use fieldwork_storage::store::BoxFuture;
use fieldwork_storage::{NewSession, SessionStore, StorageError};

/// In-memory `SessionStore` for exercising the engine without a filesystem.
/// Records every save so tests can assert on write counts and contents.
#[derive(Default)]
pub struct MemoryStore {
    pub sessions: Mutex<HashMap<String, SessionRecord>>,
    pub saves: Mutex<Vec<SessionRecord>>,
    pub active: Mutex<Option<String>>,
    pub fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }

    pub fn last_save(&self) -> Option<SessionRecord> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl SessionStore for MemoryStore {
    fn create_session(
        &self,
        new: NewSession,
    ) -> BoxFuture<'_, Result<SessionRecord, StorageError>> {
        Box::pin(async move {
            let now = jiff::Timestamp::now();
            let mut sessions = self.sessions.lock().unwrap();
            let record = SessionRecord {
                session: Session {
                    id: format!("session-{}", sessions.len() + 1),
                    interviewer: new.interviewer,
                    interviewer_email: new.interviewer_email,
                    interview_date: new.interview_date,
                    platform_name: new.platform_name,
                    employment_type: new.employment_type,
                    interview_code: new.interview_code,
                    status: SessionStatus::NotStarted,
                    completed_categories: Vec::new(),
                    start_time: now,
                    end_time: None,
                    last_updated: now,
                    current_question_index: 0,
                },
                responses: Vec::new(),
            };
            sessions.insert(record.session.id.clone(), record.clone());
            Ok(record)
        })
    }

    fn load_session<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<SessionRecord, StorageError>> {
        Box::pin(async move {
            self.sessions
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
        })
    }

    fn save_session<'a>(
        &'a self,
        record: &'a SessionRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            if self.fail_saves.load(Ordering::Relaxed) {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.sessions
                .lock()
                .unwrap()
                .insert(record.session.id.clone(), record.clone());
            self.saves.lock().unwrap().push(record.clone());
            Ok(())
        })
    }

    fn list_sessions(&self) -> BoxFuture<'_, Result<Vec<SessionRecord>, StorageError>> {
        Box::pin(async move { Ok(self.sessions.lock().unwrap().values().cloned().collect()) })
    }

    fn set_active<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            *self.active.lock().unwrap() = Some(id.to_string());
            Ok(())
        })
    }

    fn active_session_id(&self) -> BoxFuture<'_, Result<Option<String>, StorageError>> {
        Box::pin(async move { Ok(self.active.lock().unwrap().clone()) })
    }

    fn clear_active(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            *self.active.lock().unwrap() = None;
            Ok(())
        })
    }
}

pub fn question(id: &str, code: &str, name: &str) -> Question {
    Question {
        id: id.to_string(),
        text: format!("prompt for {id}"),
        category_name: name.to_string(),
        category_code: code.to_string(),
        input_type: InputType::FreeText,
        choices: None,
        follow_up_of: None,
    }
}

/// Three categories of two free-text questions each.
pub fn mini_catalog() -> Catalog {
    Catalog::new(
        vec![
            ("A".to_string(), "Alpha".to_string()),
            ("B".to_string(), "Beta".to_string()),
            ("C".to_string(), "Gamma".to_string()),
        ],
        vec![
            question("A_01", "A", "Alpha"),
            question("A_02", "A", "Alpha"),
            question("B_01", "B", "Beta"),
            question("B_02", "B", "Beta"),
            question("C_01", "C", "Gamma"),
            question("C_02", "C", "Gamma"),
        ],
    )
}

pub fn setup() -> NewSession {
    NewSession {
        interviewer: "Dana".to_string(),
        interviewer_email: None,
        interview_date: "2024-03-01".to_string(),
        platform_name: String::new(),
        employment_type: String::new(),
        interview_code: String::new(),
    }
}
