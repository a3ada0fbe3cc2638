//! Database test fixtures and utilities
//!
//! Provides a test-database fixture for the storage-backed integration
//! tests. These tests need a live PostgreSQL instance; they are gated on
//! `DATABASE_URL` and skip themselves when it is not set, so the hermetic
//! suites still run everywhere.

use sqlx::PgPool;

/// Test database fixture
///
/// Connects to `DATABASE_URL` and runs migrations. Tests create their own
/// uniquely-labeled rows and remove them via [`TestDatabase::remove_class`],
/// so parallel tests and repeated runs do not interfere.
pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Create the fixture, or `None` when `DATABASE_URL` is not set
    pub async fn try_new() -> Option<Self> {
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("DATABASE_URL not set; skipping storage-backed test");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self { pool })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// A class label unlikely to collide with other tests or leftovers
    pub fn unique_class_label() -> String {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("t{}", &suffix[..8])
    }

    /// Remove students whose roll number starts with a prefix
    ///
    /// Roll numbers embed only the last two characters of the class label,
    /// so rows left behind by an unrelated class can still collide on the
    /// unique roll number. Tests clear their prefix before creating.
    pub async fn remove_roll_prefix(&self, prefix: &str) {
        sqlx::query("DELETE FROM students WHERE roll_number LIKE $1 || '%'")
            .bind(prefix)
            .execute(&self.pool)
            .await
            .expect("Failed to clean up roll prefix");
    }

    /// Remove every student (and, via cascade, attendance row) of a class
    pub async fn remove_class(&self, class_label: &str) {
        sqlx::query("DELETE FROM students WHERE class_label = $1")
            .bind(class_label)
            .execute(&self.pool)
            .await
            .expect("Failed to clean up test class");
    }
}
