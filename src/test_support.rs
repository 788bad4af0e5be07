//! Shared fixtures for store-backed tests: an in-memory SQLite database
//! reached through the same `Any` driver the service uses in production.

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::models::User;
use crate::repositories::UserRepository;

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )",
    "CREATE TABLE roles (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    )",
    "CREATE TABLE user_role (
        user_id INTEGER NOT NULL REFERENCES users (id),
        role_id INTEGER NOT NULL REFERENCES roles (id),
        PRIMARY KEY (user_id, role_id)
    )",
    "INSERT INTO roles (id, name) VALUES (1, 'admin'), (2, 'editor'), (3, 'viewer')",
];

/// Single-connection pool over a fresh in-memory database with the schema
/// and three seeded roles. The connection is never recycled, so the data
/// lives as long as the pool.
pub async fn memory_pool() -> AnyPool {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA foreign_keys = ON")
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(&pool)
            .await
            .expect("apply test schema");
    }

    pool
}

pub async fn memory_repository() -> (UserRepository, AnyPool) {
    let pool = memory_pool().await;
    (UserRepository::new(pool.clone()), pool)
}

/// Make every delete on `user_role` fail, to exercise rollback paths.
pub async fn fail_association_deletes(pool: &AnyPool) {
    sqlx::query(
        "CREATE TRIGGER fail_user_role_delete BEFORE DELETE ON user_role
         BEGIN
             SELECT RAISE(ABORT, 'injected user_role delete failure');
         END",
    )
    .execute(pool)
    .await
    .expect("install failure trigger");
}

pub async fn association_count(pool: &AnyPool, user_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_role WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count associations")
}

pub async fn user_count(pool: &AnyPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("count users")
}

/// Request-shaped user: roles referenced by id only, as clients send them.
pub fn new_user(name: &str, email: &str, role_ids: &[i64]) -> User {
    User {
        id: 0,
        name: name.to_string(),
        email: email.to_string(),
        roles: role_ids
            .iter()
            .map(|&id| crate::models::Role {
                id,
                name: String::new(),
            })
            .collect(),
    }
}
