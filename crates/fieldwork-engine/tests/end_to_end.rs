mod common;

use std::sync::Arc;

use fieldwork_core::models::session::SessionStatus;
use fieldwork_engine::Interview;
use fieldwork_storage::SessionStore;
use fieldwork_storage::local::LocalStore;

use common::{mini_catalog, setup};

// Full lifecycle against the real file-backed store: create, answer,
// interrupt, resume from disk, finish.
#[tokio::test]
async fn interrupted_interview_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn SessionStore> = Arc::new(LocalStore::new(dir.path()));
    let catalog = Arc::new(mini_catalog());

    let mut interview = Interview::create(
        Arc::clone(&catalog),
        Arc::clone(&store),
        setup(),
    )
    .await
    .unwrap();
    interview.begin();
    interview.answer_question("A_01", "written to disk").unwrap();
    interview.skip_question("A_02").unwrap();
    interview.answer_question("B_01", "also on disk").unwrap();
    interview.save_now().await.unwrap();
    let id = interview.session().id.clone();
    drop(interview);

    // "Restart": a fresh store over the same directory.
    let store: Arc<dyn SessionStore> = Arc::new(LocalStore::new(dir.path()));
    assert_eq!(store.active_session_id().await.unwrap().as_deref(), Some(id.as_str()));

    let mut interview = Interview::resume(Arc::clone(&catalog), Arc::clone(&store), &id)
        .await
        .unwrap();
    assert_eq!(interview.responses().len(), 3);
    assert_eq!(
        interview.responses().get("A_01").unwrap().answer,
        "written to disk"
    );
    // B_01 was the last substantive answer, so the interview resumes at B_02.
    assert_eq!(interview.position(), (1, 1));

    for id in ["B_02", "C_01", "C_02"] {
        interview.answer_question(id, "finishing up").unwrap();
    }
    interview.save_now().await.unwrap();

    let reloaded = store.load_session(interview.session().id.as_str()).await.unwrap();
    assert_eq!(reloaded.session.status, SessionStatus::Completed);
    assert!(reloaded.session.end_time.is_some());
    assert_eq!(reloaded.responses.len(), 6);
}
