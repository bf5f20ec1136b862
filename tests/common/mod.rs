use diesel_migrations::MigrationHarness;
use tempfile::TempDir;

use prenota::db::{DbPool, MIGRATIONS, establish_connection_pool};

/// A throwaway SQLite database with the schema applied. The backing file
/// lives in a temp directory and disappears when the harness is dropped.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(file_name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(file_name).display().to_string();

        let pool = establish_connection_pool(&database_url).expect("failed to build pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
