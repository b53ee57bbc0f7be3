use rtracklog::errors::{AppError, ErrorKind};
use rtracklog::models::TrackingEntry;
use rtracklog::repository::{EntryRepository, MemoryRepository, SqliteRepository};
use rusqlite::Connection;

mod common;
use common::{fields, setup_test_db};

/// CRUD contract shared by every backend.
fn exercise_crud<R: EntryRepository>(repo: &mut R) {
    assert!(repo.list_all().unwrap().is_empty());

    let venus = fields("Venus", "2024-01-01", "08:00 AM", true, false, true);
    let jupiter = fields("Jupiter", "2024-01-02", "09:00 AM", false, true, false);

    let id1 = repo.create(&venus).unwrap();
    let id2 = repo.create(&jupiter).unwrap();
    assert!(id2 > id1);

    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0], TrackingEntry::from_fields(id1, venus.clone()));
    assert_eq!(all[1], TrackingEntry::from_fields(id2, jupiter.clone()));

    // no mutation in between → same sequence
    assert_eq!(repo.list_all().unwrap(), all);

    let mut changed = venus.clone();
    changed.note = "called back".into();
    changed.scheduled_tx = true;
    repo.update(id1, &changed).unwrap();
    assert_eq!(repo.get(id1).unwrap().fields(), changed);
    assert_eq!(repo.get(id1).unwrap().id, id1);

    repo.delete(id1).unwrap();
    assert!(matches!(repo.delete(id1), Err(AppError::NotFound(id)) if id == id1));
    assert!(matches!(repo.update(id1, &venus), Err(AppError::NotFound(_))));
    assert!(matches!(repo.get(id1), Err(AppError::NotFound(_))));

    // ids are never handed out twice
    let id3 = repo.create(&venus).unwrap();
    assert!(id3 > id2);
}

#[test]
fn memory_repository_crud() {
    let mut repo = MemoryRepository::new();
    exercise_crud(&mut repo);
}

#[test]
fn sqlite_repository_crud() {
    let db = setup_test_db("repo_crud");
    let mut repo = SqliteRepository::open(&db).unwrap();
    exercise_crud(&mut repo);
}

#[test]
fn sqlite_in_memory_crud() {
    let mut repo = SqliteRepository::open_in_memory().unwrap();
    exercise_crud(&mut repo);
}

#[test]
fn sqlite_entries_survive_reopen() {
    let db = setup_test_db("repo_reopen");
    let f = fields("Jupiter", "2024-03-05", "04:30 PM", true, true, false);

    let id = {
        let mut repo = SqliteRepository::open(&db).unwrap();
        repo.create(&f).unwrap()
    };

    let repo = SqliteRepository::open(&db).unwrap();
    let all = repo.list_all().unwrap();
    assert_eq!(all, vec![TrackingEntry::from_fields(id, f)]);
}

#[test]
fn not_found_maps_to_not_found_kind() {
    let mut repo = MemoryRepository::new();
    let err = repo.delete(42).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "No entry found with id 42");
}

#[test]
fn mutations_are_written_to_the_internal_log() {
    let db = setup_test_db("repo_log");
    let mut repo = SqliteRepository::open(&db).unwrap();

    let id = repo
        .create(&fields("Venus", "2024-01-01", "08:00 AM", false, false, false))
        .unwrap();
    repo.delete(id).unwrap();

    let log = rtracklog::db::log::load_log(&repo.pool().conn).unwrap();
    let ops: Vec<&str> = log.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(ops, vec!["add", "del"]);
    assert_eq!(log[0].target, format!("#{}", id));
}

#[test]
fn create_many_inserts_the_whole_batch() {
    let db = setup_test_db("repo_batch");
    let mut repo = SqliteRepository::open(&db).unwrap();

    let batch = vec![
        fields("Venus", "2024-01-01", "08:00 AM", true, false, false),
        fields("Jupiter", "2024-01-01", "08:30 AM", false, false, true),
    ];
    let ids = repo.create_many(&batch).unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(repo.list_all().unwrap().len(), 2);
}

#[test]
fn create_many_rolls_back_when_a_row_is_rejected() {
    let db = setup_test_db("repo_batch_rollback");
    let mut repo = SqliteRepository::open(&db).unwrap();

    repo.pool()
        .conn
        .execute_batch(
            "CREATE TRIGGER reject_jupiter BEFORE INSERT ON tracking
             WHEN NEW.name = 'Jupiter'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let batch = vec![
        fields("Venus", "2024-01-01", "08:00 AM", true, false, false),
        fields("Jupiter", "2024-01-01", "08:30 AM", false, false, true),
        fields("Venus", "2024-01-02", "09:00 AM", false, false, false),
    ];
    let err = repo.create_many(&batch).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Persistence);

    // the Venus row inserted before the failure is gone too
    assert!(repo.list_all().unwrap().is_empty());

    let log = rtracklog::db::log::load_log(&repo.pool().conn).unwrap();
    assert!(log.iter().all(|r| r.operation != "import"));
}

#[test]
fn legacy_spreadsheet_table_is_migrated_and_normalized() {
    let db = setup_test_db("repo_legacy");

    {
        let conn = Connection::open(&db).unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE tracking (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                name     TEXT,
                date     TEXT,
                time     TEXT,
                started  TEXT,
                typetx   TEXT,
                typesrp  INTEGER
            );
            INSERT INTO tracking (name, date, time, started, typetx, typesrp)
                VALUES ('Venus', '2024-01-01', '8:00 AM', 'TRUE', 'false', 1);
            INSERT INTO tracking (name, date, time, started, typetx, typesrp)
                VALUES ('Jupiter', '2024-01-02 00:00:00', '12:30 PM', '0', 'yes', 0);
            "#,
        )
        .unwrap();
    }

    let repo = SqliteRepository::open(&db).unwrap();
    let all = repo.list_all().unwrap();
    assert_eq!(all.len(), 2);

    assert_eq!(all[0].name, "Venus");
    assert!(all[0].started);
    assert!(!all[0].scheduled_tx);
    assert!(all[0].same_day_srp);
    assert_eq!(all[0].time_str(), "08:00 AM");
    assert_eq!(all[0].note, "");

    assert_eq!(all[1].date_str(), "2024-01-02");
    assert!(!all[1].started);
    assert!(all[1].scheduled_tx);
    assert!(!all[1].same_day_srp);
    assert_eq!(all[1].time_str(), "12:30 PM");
}

#[test]
fn migrations_are_idempotent() {
    let conn = Connection::open_in_memory().unwrap();
    rtracklog::db::initialize::init_db(&conn).unwrap();
    rtracklog::db::initialize::init_db(&conn).unwrap();

    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='tracking'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(n, 1);
}
