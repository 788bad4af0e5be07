use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A role a user can be associated with. Roles are managed outside this
/// service; requests usually reference them by id only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, FromRow, ToSchema)]
pub struct Role {
    #[schema(example = 1)]
    pub id: i64,
    #[serde(default)]
    #[schema(example = "admin")]
    pub name: String,
}

/// User base row plus its role set.
///
/// `roles` is never stored on the `users` row; it is assembled from the
/// `user_role` join table when a single user is fetched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, FromRow, ToSchema)]
pub struct User {
    #[serde(default)]
    #[schema(example = 7)]
    pub id: i64,
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ann@example.com")]
    pub email: String,
    #[serde(default)]
    #[sqlx(skip)]
    pub roles: Vec<Role>,
}

impl User {
    /// Distinct role ids in ascending order; the association set to persist.
    pub fn role_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.roles.iter().map(|role| role.id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
