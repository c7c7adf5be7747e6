use bujo_core::db::migrations::{latest_version, schema_version};
use bujo_core::db::{open_db, open_db_in_memory, DbError};
use bujo_core::store::keys;
use bujo_core::{KvRepository, SqliteKvRepository};
use rusqlite::Connection;

#[test]
fn in_memory_journal_starts_with_empty_namespace() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert!(SqliteKvRepository::new(&conn).keys().unwrap().is_empty());
}

#[test]
fn open_db_creates_missing_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile").join("journal").join("bujo.sqlite3");

    let conn = open_db(&path).unwrap();
    SqliteKvRepository::new(&conn)
        .put_raw(keys::PROFILE, r#"{"name":"Ana","photoUrl":""}"#)
        .unwrap();

    assert!(path.is_file());
}

#[test]
fn stored_slices_survive_reopen_without_rerunning_migrations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bujo.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteKvRepository::new(&conn);
        repo.put_raw(keys::GRATITUDE, "[]").unwrap();
        repo.put_raw(keys::GRATITUDE, r#"[{"id":"1","content":"sun","date":0}]"#)
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let repo = SqliteKvRepository::new(&conn);
    assert_eq!(repo.keys().unwrap(), vec![keys::GRATITUDE.to_string()]);
    assert_eq!(
        repo.get_raw(keys::GRATITUDE).unwrap().as_deref(),
        Some(r#"[{"id":"1","content":"sun","date":0}]"#)
    );
}

#[test]
fn journal_from_newer_build_is_refused_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bujo.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE kv_entries (key TEXT PRIMARY KEY, value TEXT NOT NULL, updated_at INTEGER);
         INSERT INTO kv_entries (key, value, updated_at) VALUES ('mb_habits', '[]', 0);
         PRAGMA user_version = 999;",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert_eq!(err.code(), "journal_too_new");
    match err {
        DbError::JournalTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let raw = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&raw).unwrap(), 999);
    let value: String = raw
        .query_row(
            "SELECT value FROM kv_entries WHERE key = 'mb_habits';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn unusable_data_directory_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = open_db(blocker.join("bujo.sqlite3")).unwrap_err();
    assert!(matches!(err, DbError::DataDir { ref path, .. } if path == &blocker));
    assert_eq!(err.code(), "journal_data_dir");
}
