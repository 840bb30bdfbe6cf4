use bagdar_core::model::{QuizSession, Recommendation, RecommendedProgram};
use bagdar_core::time::fixed_now;
use storage::repository::{SessionSnapshot, SnapshotRepository};

use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_starts_fresh() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Бастау"), "missing start button in {html}");
    assert!(
        !html.contains("Жалғастыру"),
        "resume offered without saved progress in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn intro_smoke_offers_resume_for_saved_progress() {
    let mut harness = setup_view_harness();
    let mut session = QuizSession::new(5);
    session.start(fixed_now());
    session.submit_answer("Математика").expect("answer");
    session.submit_answer("Технология").expect("answer");
    harness
        .storage
        .snapshots
        .save(&SessionSnapshot::from_session(&session))
        .await
        .expect("save snapshot");

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Жалғастыру"), "missing resume button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_smoke_renders_the_first_question() {
    let mut harness = setup_view_harness();
    harness.quiz.start().await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Сұрақ 1 / 5"), "missing question pill in {html}");
    assert!(
        html.contains("Математика"),
        "missing first question option in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn result_smoke_renders_programs_and_actions() {
    let mut harness = setup_view_harness();
    let mut session = QuizSession::new(5);
    session.start(fixed_now());
    for label in ["Математика", "Технология", "Логика", "Топпен", "IT"] {
        session.submit_answer(label).expect("answer");
    }
    let result = Recommendation {
        profile_summary: "Сенің мықты жағың — логика мен технология.".to_owned(),
        recommended_programs: vec![RecommendedProgram {
            name: "Информатика".to_owned(),
            description: "IT мұғалімдерін даярлау.".to_owned(),
            why_fits: "Логикаға бейімсің.".to_owned(),
            subjects: "Математика – Информатика".to_owned(),
        }],
    };
    session
        .complete_with_result(result, fixed_now())
        .expect("complete");
    harness
        .storage
        .snapshots
        .save(&SessionSnapshot::from_session(&session))
        .await
        .expect("save snapshot");
    harness.quiz.resume().await;

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Информатика"), "missing program in {html}");
    assert!(
        html.contains("Нәтижені жіберу"),
        "missing submit action in {html}"
    );
    assert!(html.contains("WhatsApp"), "missing share link in {html}");
}
