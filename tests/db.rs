use movie_catalog::db::{foreign_keys_enabled, run_migrations};

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    assert!(foreign_keys_enabled(&mut conn).expect("pragma should be readable"));
}

#[test]
fn migrations_are_idempotent() {
    let test_db = common::TestDb::new();
    run_migrations(&test_db.pool()).expect("second run should be a no-op");
}
