//! Filesystem session archive.
//!
//! One JSON document per session under `sessions/<id>.json`, plus an
//! `active_session` pointer file. Writes are atomic (tmp + rename) so a
//! crash mid-save never leaves a half-written archive entry.

use std::path::{Path, PathBuf};

use fieldwork_core::models::session::{Session, SessionRecord, SessionStatus};
use fieldwork_core::store_keys;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{BoxFuture, NewSession, SessionStore};

#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The platform data directory, e.g. `~/.local/share/fieldwork`.
    pub fn default_root() -> Result<PathBuf, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(base.join("fieldwork"))
    }

    fn session_path(&self, id: &str) -> PathBuf {
        self.root.join(store_keys::session(id))
    }

    fn active_path(&self) -> PathBuf {
        self.root.join(store_keys::ACTIVE_SESSION)
    }

    async fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        // Append rather than `with_extension`, so a dotted file name can
        // never shift which path the temp write lands on.
        let mut tmp = path.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }

    async fn read_record(&self, id: &str) -> Result<SessionRecord, StorageError> {
        let path = self.session_path(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::NotFound { id: id.to_string() });
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupted {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }
}

impl SessionStore for LocalStore {
    fn create_session(
        &self,
        new: NewSession,
    ) -> BoxFuture<'_, Result<SessionRecord, StorageError>> {
        Box::pin(async move {
            let now = jiff::Timestamp::now();
            let record = SessionRecord {
                session: Session {
                    id: Uuid::new_v4().to_string(),
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
            self.save_session(&record).await?;
            tracing::debug!(id = %record.session.id, "session created");
            Ok(record)
        })
    }

    fn load_session<'a>(
        &'a self,
        id: &'a str,
    ) -> BoxFuture<'a, Result<SessionRecord, StorageError>> {
        Box::pin(self.read_record(id))
    }

    fn save_session<'a>(
        &'a self,
        record: &'a SessionRecord,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            let json = serde_json::to_vec_pretty(record)?;
            let path = self.session_path(&record.session.id);
            self.write_atomic(&path, &json).await?;
            tracing::debug!(id = %record.session.id, path = %path.display(), "session saved");
            Ok(())
        })
    }

    fn list_sessions(&self) -> BoxFuture<'_, Result<Vec<SessionRecord>, StorageError>> {
        Box::pin(async move {
            let dir = self.root.join(store_keys::SESSIONS_PREFIX);
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(e) => return Err(e.into()),
            };

            let mut records = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("json") {
                    continue;
                }
                let bytes = tokio::fs::read(&path).await?;
                match serde_json::from_slice::<SessionRecord>(&bytes) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        // A corrupted entry shouldn't take the whole list down.
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "skipping unreadable session file"
                        );
                    }
                }
            }
            Ok(records)
        })
    }

    fn set_active<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.write_atomic(&self.active_path(), id.as_bytes()).await
        })
    }

    fn active_session_id(&self) -> BoxFuture<'_, Result<Option<String>, StorageError>> {
        Box::pin(async move {
            match tokio::fs::read_to_string(self.active_path()).await {
                Ok(id) => {
                    let id = id.trim().to_string();
                    Ok(if id.is_empty() { None } else { Some(id) })
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn clear_active(&self) -> BoxFuture<'_, Result<(), StorageError>> {
        Box::pin(async move {
            match tokio::fs::remove_file(self.active_path()).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
    }
}
