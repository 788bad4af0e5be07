//! User service: id parsing and the existence rule for deletes, on top of
//! plain delegation to the repository.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_email;

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(repository: UserRepository) -> Self {
        Self::with_repository(Arc::new(repository))
    }

    /// Create a UserService over a shared repository.
    pub fn with_repository(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        debug!("Fetching user by ID: {}", user_id);
        let id = parse_user_id(user_id)?;
        self.repository.get_user(id).await
    }

    /// Create a user and return it with the store-assigned id.
    pub async fn create_user(&self, user: User) -> Result<User, ApiError> {
        info!(
            "Creating user {} with {} role(s)",
            mask_email(&user.email),
            user.roles.len()
        );
        let id = self.repository.create_user(&user).await?;
        Ok(User { id, ..user })
    }

    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        self.repository.get_users().await
    }

    pub async fn update_user(&self, user_id: &str, user: User) -> Result<(), ApiError> {
        let id = parse_user_id(user_id)?;
        info!("Updating user {} with {} role(s)", id, user.roles.len());
        self.repository.update_user(id, &user).await
    }

    /// Delete a user, failing with not-found instead of a silent no-op when
    /// the id has no row.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        let id = parse_user_id(user_id)?;

        self.repository.get_user(id).await.inspect_err(|err| {
            if err.is_not_found() {
                warn!("Delete failed: User not found with id: {}", id);
            }
        })?;

        self.repository.delete_user(id).await
    }
}

fn parse_user_id(user_id: &str) -> Result<i64, ApiError> {
    user_id.parse::<i64>().map_err(|_| {
        warn!("Rejected malformed user id: {:?}", user_id);
        ApiError::invalid_user_id()
    })
}
