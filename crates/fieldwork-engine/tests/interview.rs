mod common;

use std::sync::Arc;

use fieldwork_catalog::Catalog;
use fieldwork_core::models::question::{InputType, Question};
use fieldwork_core::models::response::{NOT_APPLICABLE, SKIPPED};
use fieldwork_core::models::session::SessionStatus;
use fieldwork_engine::progress::{CategoryStatus, QuestionStatus};
use fieldwork_engine::{Interview, SurveyError};
use fieldwork_storage::SessionStore;

use common::{MemoryStore, mini_catalog, question, setup};

async fn start(catalog: Catalog) -> (Arc<MemoryStore>, Interview) {
    let store = Arc::new(MemoryStore::default());
    let mut interview = Interview::create(
        Arc::new(catalog),
        Arc::clone(&store) as Arc<dyn SessionStore>,
        setup(),
    )
    .await
    .unwrap();
    interview.begin();
    (store, interview)
}

#[tokio::test]
async fn create_marks_the_session_active() {
    let (store, interview) = start(mini_catalog()).await;

    assert_eq!(
        store.active.lock().unwrap().as_deref(),
        Some(interview.session().id.as_str())
    );
    assert_eq!(interview.session().status, SessionStatus::InProgress);
}

#[tokio::test]
async fn answering_every_question_completes_the_session() {
    let (_store, mut interview) = start(mini_catalog()).await;

    for id in ["A_01", "A_02", "B_01", "B_02", "C_01", "C_02"] {
        interview.answer_question(id, "an answer").unwrap();
    }

    let session = interview.session();
    assert_eq!(session.status, SessionStatus::Completed);
    assert!(session.end_time.is_some());
    assert_eq!(session.completed_categories.len(), 3);
    assert_eq!(interview.statistics().completion_percentage, 100.0);
}

#[tokio::test]
async fn completed_sessions_reject_further_edits() {
    let (_store, mut interview) = start(mini_catalog()).await;
    for id in ["A_01", "A_02", "B_01", "B_02", "C_01", "C_02"] {
        interview.answer_question(id, "an answer").unwrap();
    }

    assert!(matches!(
        interview.answer_question("A_01", "too late"),
        Err(SurveyError::SessionCompleted)
    ));
    assert!(matches!(
        interview.skip_category("A"),
        Err(SurveyError::SessionCompleted)
    ));
}

#[tokio::test]
async fn skip_question_records_the_sentinel() {
    let (_store, mut interview) = start(mini_catalog()).await;

    interview.skip_question("A_01").unwrap();

    assert_eq!(interview.responses().get("A_01").unwrap().answer, SKIPPED);
    assert_eq!(interview.question_status("A_01"), QuestionStatus::Skipped);
    // Skips count toward category completion.
    interview.skip_question("A_02").unwrap();
    assert_eq!(interview.category_status("A"), CategoryStatus::Completed);
}

#[tokio::test]
async fn skip_category_bulk_fills_not_applicable() {
    let (_store, mut interview) = start(Catalog::builtin().clone()).await;

    interview.skip_category("WS").unwrap();

    let ws_questions = interview.catalog().questions_in("WS").len();
    assert_eq!(ws_questions, 4);
    for q in Catalog::builtin().questions_in("WS") {
        assert_eq!(interview.responses().get(&q.id).unwrap().answer, NOT_APPLICABLE);
    }
    assert!(interview.session().completed_categories.contains(&"WS".to_string()));
    assert!(interview.category_progress("WS").bulk_skipped);
    assert_eq!(interview.category_status("WS"), CategoryStatus::Completed);
}

#[tokio::test]
async fn complete_category_refuses_unaddressed_questions() {
    let (_store, mut interview) = start(mini_catalog()).await;
    interview.answer_question("A_01", "only one").unwrap();

    match interview.complete_category("A") {
        Err(SurveyError::CategoryIncomplete { code, addressed, total }) => {
            assert_eq!(code, "A");
            assert_eq!(addressed, 1);
            assert_eq!(total, 2);
        }
        other => panic!("expected CategoryIncomplete, got {other:?}"),
    }

    interview.skip_question("A_02").unwrap();
    interview.complete_category("A").unwrap();
    assert!(interview.session().completed_categories.contains(&"A".to_string()));
}

#[tokio::test]
async fn completed_categories_never_unmark() {
    let (_store, mut interview) = start(mini_catalog()).await;
    interview.answer_question("A_01", "first").unwrap();
    interview.answer_question("A_02", "second").unwrap();
    assert!(interview.session().completed_categories.contains(&"A".to_string()));

    // Overwriting an answer does not revert the explicit completion mark.
    interview.answer_question("A_01", "revised").unwrap();
    assert_eq!(
        interview
            .session()
            .completed_categories
            .iter()
            .filter(|c| *c == "A")
            .count(),
        1
    );
}

#[tokio::test]
async fn rejected_answers_are_not_recorded() {
    let yes_no = Question {
        input_type: InputType::YesNo,
        ..question("A_01", "A", "Alpha")
    };
    let catalog = Catalog::new(
        vec![("A".to_string(), "Alpha".to_string())],
        vec![yes_no, question("A_02", "A", "Alpha")],
    );
    let (_store, mut interview) = start(catalog).await;

    assert!(matches!(
        interview.answer_question("A_01", "Maybe"),
        Err(SurveyError::Rejected { .. })
    ));
    assert!(interview.responses().get("A_01").is_none());

    interview.answer_question("A_01", "Yes").unwrap();
    assert_eq!(interview.responses().get("A_01").unwrap().answer, "Yes");
}

#[tokio::test]
async fn unknown_ids_are_reported() {
    let (_store, mut interview) = start(mini_catalog()).await;

    assert!(matches!(
        interview.answer_question("ZZ_99", "nope"),
        Err(SurveyError::QuestionNotFound(_))
    ));
    assert!(matches!(
        interview.skip_category("ZZ"),
        Err(SurveyError::CategoryNotFound(_))
    ));
}

#[tokio::test]
async fn basic_information_answers_mirror_into_metadata() {
    let (_store, mut interview) = start(Catalog::builtin().clone()).await;

    interview.answer_question("BI_01", "  Uber  ").unwrap();
    interview.answer_question("BI_02", "Full-time").unwrap();
    interview.answer_question("BI_03", "INT-042").unwrap();

    let session = interview.session();
    assert_eq!(session.platform_name, "Uber");
    assert_eq!(session.employment_type, "Full-time");
    assert_eq!(session.interview_code, "INT-042");
}

#[tokio::test]
async fn save_and_resume_restores_state_and_position() {
    let store = Arc::new(MemoryStore::default());
    let catalog = Arc::new(mini_catalog());
    let mut interview = Interview::create(
        Arc::clone(&catalog),
        Arc::clone(&store) as Arc<dyn SessionStore>,
        setup(),
    )
    .await
    .unwrap();
    interview.begin();
    interview.answer_question("A_01", "first").unwrap();
    interview.answer_question("A_02", "second").unwrap();
    interview.save_now().await.unwrap();
    let id = interview.session().id.clone();
    drop(interview);

    let resumed = Interview::resume(
        Arc::clone(&catalog),
        Arc::clone(&store) as Arc<dyn SessionStore>,
        &id,
    )
    .await
    .unwrap();

    assert_eq!(resumed.responses().len(), 2);
    assert_eq!(resumed.session().status, SessionStatus::InProgress);
    // Category A is exhausted, so the interview picks up at B's first question.
    assert_eq!(resumed.position(), (1, 0));
    assert_eq!(resumed.current_question().unwrap().id, "B_01");
}

#[tokio::test]
async fn navigation_moves_do_not_write() {
    let (store, mut interview) = start(mini_catalog()).await;
    interview.save_now().await.unwrap();
    let baseline = store.save_count();

    assert!(interview.next_question());
    assert!(interview.move_to_next_category());
    assert!(interview.jump_to_category("C"));
    assert!(!interview.has_pending_save());
    assert_eq!(store.save_count(), baseline);
}

#[tokio::test]
async fn export_reflects_the_session() {
    let (_store, mut interview) = start(mini_catalog()).await;
    interview.answer_question("A_01", "alpha one").unwrap();
    interview.skip_question("A_02").unwrap();

    let doc = interview.export();
    assert_eq!(doc.session_info.id, interview.session().id);
    assert!(doc.session_info.duration >= 0);
    assert_eq!(doc.responses.len(), 2);
    assert_eq!(doc.responses[0].question_id, "A_01");
    assert_eq!(doc.responses[0].category.as_deref(), Some("Alpha"));
    assert_eq!(doc.summary.total_questions, 6);
    assert_eq!(doc.summary.answered_questions, 1);

    let json = serde_json::to_value(&doc).unwrap();
    assert!(json.get("sessionInfo").is_some());
    assert!(json["responses"][0].get("questionId").is_some());
}
