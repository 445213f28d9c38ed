use pocket_core::db::migrations::latest_version;
use pocket_core::db::{open_db, open_db_in_memory, DbError};
use pocket_core::{keys, PersistentStore, SqliteStore, StoreError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv");
}

#[test]
fn open_db_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("pocket.sqlite3");

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    assert!(path.exists());
}

#[test]
fn values_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocket.sqlite3");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set(keys::PLAYLIST, "https://open.spotify.com/playlist/abc").unwrap();
        store.set(keys::SCORE, "20").unwrap();
        store.remove(keys::SCORE).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(
        store.get(keys::PLAYLIST).unwrap().as_deref(),
        Some("https://open.spotify.com/playlist/abc")
    );
    assert_eq!(store.get(keys::SCORE).unwrap(), None);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = match SqliteStore::open(&path) {
        Ok(_) => panic!("newer schema must be refused"),
        Err(err) => err,
    };
    match err {
        StoreError::Db(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
