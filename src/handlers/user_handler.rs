//! User CRUD handlers. Each one maps a request onto a single service call;
//! status mapping for failures lives in `ApiError`.

use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::{MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::errors::ApiError;
use crate::models::{ApiResponse, User};
use crate::services::UserService;

/// List all users (roles are not loaded)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, without roles", body = Vec<User>),
        (status = 500, description = "Store error", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_users().await?;
    debug!("Listing {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}

/// Create a user together with its role links
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created; the body echoes it with the assigned id"),
        (status = 400, description = "Malformed body", body = crate::models::ErrorResponse),
        (status = 500, description = "Store error", body = crate::models::ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_CREATED, user)))
}

/// Get a user by ID, including its roles
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Store error", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let user = user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Replace a user's name, email and role set
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = User,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Malformed ID or body", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Store error", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user_service
        .update_user(&user_id, body.into_inner())
        .await?;

    info!("Successfully updated user: {}", user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_USER_UPDATED)))
}

/// Delete a user and all of its role links
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Malformed ID", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 500, description = "Store error", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    user_service.delete_user(&user_id).await?;

    info!("Successfully deleted user: {}", user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_USER_DELETED)))
}
