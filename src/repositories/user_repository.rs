//! User repository for all SQL operations on users and their role links.
//!
//! Writes that touch more than one table run inside a single transaction.
//! The transaction guard rolls back when dropped uncommitted, so every early
//! return through `?` leaves the store as it was.

use futures::TryStreamExt;
use log::{debug, info};
use sqlx::any::{AnyPoolOptions, AnyQueryResult};
use sqlx::{Any, AnyPool, Transaction};

use crate::config::Config;
use crate::constants::ERR_MISSING_INSERT_ID;
use crate::errors::ApiError;
use crate::models::{Role, User};

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: AnyPool,
}

impl UserRepository {
    /// Open a connection pool for the store described by `config`.
    pub async fn connect(config: &Config) -> Result<Self, ApiError> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect(&config.database_url())
            .await?;

        Ok(Self::new(pool))
    }

    /// Wrap an already configured pool.
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Round-trip a trivial query to verify the store is reachable.
    pub async fn ping(&self) -> Result<(), ApiError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Fetch a user by id, with its roles joined in.
    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);

        let mut user = sqlx::query_as::<_, User>("SELECT id, name, email FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(ApiError::user_not_found)?;

        user.roles = sqlx::query_as::<_, Role>(
            "SELECT r.id, r.name FROM roles r \
             INNER JOIN user_role ur ON r.id = ur.role_id \
             WHERE ur.user_id = ? \
             ORDER BY r.id",
        )
        .bind(id)
        .fetch(&self.pool)
        .try_collect()
        .await?;

        Ok(user)
    }

    /// Insert a user and its role links atomically. Returns the assigned id.
    pub async fn create_user(&self, user: &User) -> Result<i64, ApiError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .execute(&mut *tx)
            .await?;

        let user_id = inserted_id(&mut tx, &result).await?;

        insert_roles(&mut tx, user_id, &user.role_ids()).await?;

        tx.commit().await?;
        info!("Repository: Created user {}", user_id);
        Ok(user_id)
    }

    /// List all base rows. Roles are not loaded for list reads.
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Listing users");

        let users = sqlx::query_as::<_, User>("SELECT id, name, email FROM users ORDER BY id")
            .fetch(&self.pool)
            .try_collect()
            .await?;

        Ok(users)
    }

    /// Overwrite name/email and replace the role set wholesale.
    pub async fn update_user(&self, id: i64, user: &User) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query("SELECT id FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Err(ApiError::user_not_found());
        }

        sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        delete_roles(&mut tx, id).await?;
        insert_roles(&mut tx, id, &user.role_ids()).await?;

        tx.commit().await?;
        info!("Repository: Updated user {}", id);
        Ok(())
    }

    /// Remove a user's role links, then the user row.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let mut tx = self.pool.begin().await?;

        // Links first, so a foreign key on user_role never blocks the row delete.
        delete_roles(&mut tx, id).await?;

        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("Repository: Deleted user {}", id);
        Ok(())
    }
}

/// Id assigned to the row just inserted on this connection.
///
/// MySQL reports it in the query result; the SQLite driver does not, so it is
/// read back with `last_insert_rowid()` on the same connection.
async fn inserted_id(
    tx: &mut Transaction<'_, Any>,
    result: &AnyQueryResult,
) -> Result<i64, ApiError> {
    if let Some(id) = result.last_insert_id() {
        return Ok(id);
    }

    let query = if tx.backend_name().eq_ignore_ascii_case("sqlite") {
        "SELECT last_insert_rowid()"
    } else {
        "SELECT LAST_INSERT_ID()"
    };

    sqlx::query_scalar::<_, i64>(query)
        .fetch_optional(&mut **tx)
        .await?
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::store(ERR_MISSING_INSERT_ID))
}

async fn delete_roles(tx: &mut Transaction<'_, Any>, user_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_role WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn insert_roles(
    tx: &mut Transaction<'_, Any>,
    user_id: i64,
    role_ids: &[i64],
) -> Result<(), sqlx::Error> {
    for role_id in role_ids {
        sqlx::query("INSERT INTO user_role (user_id, role_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(*role_id)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
