use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, Role, User};

/// OpenAPI documentation for the user/role API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Roles API",
        version = "0.1.0",
        description = "CRUD API for users and their role associations. Role sets are replaced wholesale on every write.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User CRUD with role associations")
    ),
    paths(
        crate::handlers::get_users,
        crate::handlers::create_user,
        crate::handlers::get_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(User, Role, ErrorResponse, HealthResponse)
    )
)]
pub struct ApiDoc;
