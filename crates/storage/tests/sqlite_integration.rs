use bagdar_core::model::{Phase, QuizSession, Recommendation, RecommendedProgram};
use bagdar_core::time::fixed_now;
use storage::repository::{SessionSnapshot, SnapshotRepository};
use storage::sqlite::{SNAPSHOT_KEY, SqliteRepository};

fn finished_session() -> QuizSession {
    let mut session = QuizSession::new(5);
    session.set_nickname("Нұрлан");
    session.start(fixed_now());
    for label in ["Математика", "Технология", "Логика", "Топпен", "IT"] {
        session.submit_answer(label).unwrap();
    }
    let result = Recommendation {
        profile_summary: "Техникалық бейімі бар оқушы".into(),
        recommended_programs: vec![RecommendedProgram {
            name: "6B06101 Информатика".into(),
            description: "IT бағдарлама".into(),
            why_fits: "Логика мен математикаға жүйрік".into(),
            subjects: "Математика – Информатика".into(),
        }],
    };
    session.complete_with_result(result, fixed_now()).unwrap();
    session
}

#[tokio::test]
async fn sqlite_roundtrip_restores_identical_session() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let session = finished_session();
    let snapshot = SessionSnapshot::from_session(&session);
    repo.save(&snapshot).await.unwrap();

    let loaded = repo.load().await.unwrap().expect("snapshot present");
    assert_eq!(loaded, snapshot);

    let restored = loaded.into_session(5).unwrap();
    assert_eq!(restored.phase(), Phase::Result);
    assert_eq!(restored.answers(), session.answers());
    assert_eq!(restored.nickname(), session.nickname());
    assert_eq!(restored.result(), session.result());
    assert_eq!(restored.submitted(), session.submitted());
}

#[tokio::test]
async fn sqlite_last_write_wins() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_lww?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let mut session = QuizSession::new(5);
    session.start(fixed_now());
    session.submit_answer("Өнер").unwrap();
    repo.save(&SessionSnapshot::from_session(&session)).await.unwrap();

    session.submit_answer("Зерттеу").unwrap();
    let second = SessionSnapshot::from_session(&session);
    repo.save(&second).await.unwrap();

    let loaded = repo.load().await.unwrap().expect("snapshot present");
    assert_eq!(loaded, second);
    assert_eq!(loaded.answers.len(), 2);
}

#[tokio::test]
async fn sqlite_corrupt_payload_degrades_to_none() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_corrupt?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    sqlx::query("INSERT INTO snapshots (key, payload) VALUES (?1, ?2)")
        .bind(SNAPSHOT_KEY)
        .bind("not json")
        .execute(repo.pool())
        .await
        .unwrap();

    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_clear_then_load_finds_nothing() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_clear?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let session = finished_session();
    repo.save(&SessionSnapshot::from_session(&session)).await.unwrap();
    repo.clear().await.unwrap();

    assert!(repo.load().await.unwrap().is_none());
}
