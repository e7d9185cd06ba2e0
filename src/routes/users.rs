use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch, post},
};

use crate::{
    dto::{
        auth::AdminStatus,
        users::{CreateUserRequest, UpdateUserRequest},
    },
    error::AppResult,
    middleware::auth::{AdminUser, AuthUser, ensure_self},
    models::User,
    repository::{parse_id, users::Registration},
    response::{DeleteResult, InsertOneResult, UpdateResult},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/{id}", patch(update_user).delete(delete_user))
        .route("/users/admin/{key}", get(admin_status).patch(make_admin))
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Stored, or `insertedId: null` when the email is taken", body = InsertOneResult),
        (status = 400, description = "Missing email")
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<InsertOneResult>> {
    match state.repos.users.register(payload).await? {
        Registration::Created(id) => Ok(Json(InsertOneResult::inserted(id))),
        Registration::AlreadyExists => {
            tracing::debug!("duplicate user registration ignored");
            Ok(Json(InsertOneResult::rejected("user already exists")))
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Every registered user", body = Vec<User>),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.repos.users.list().await?))
}

#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(("email" = String, Path, description = "Must be the caller's own email")),
    responses(
        (status = 200, description = "Whether the caller holds the admin role", body = AdminStatus),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Email belongs to someone else")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn admin_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(email): Path<String>,
) -> AppResult<Json<AdminStatus>> {
    ensure_self(&user, &email)?;
    let admin = state
        .repos
        .users
        .find_by_email(&email)
        .await?
        .is_some_and(|u| u.is_admin());
    Ok(Json(AdminStatus { admin }))
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id, or the sign-in provider uid")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = UpdateResult),
        (status = 400, description = "Empty id or malformed lastSignInTime")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UpdateResult>> {
    let rows = state.repos.users.update_profile(&id, payload).await?;
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Role set to admin", body = UpdateResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn make_admin(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<UpdateResult>> {
    let id = parse_id(&id)?;
    let rows = state.repos.users.promote_to_admin(id).await?;
    tracing::info!(user_id = %id, by = %admin.email, "user promoted to admin");
    Ok(Json(UpdateResult::new(rows)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "User removed", body = DeleteResult),
        (status = 401, description = "Missing or invalid token"),
        (status = 403, description = "Caller is not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let rows = state.repos.users.delete(parse_id(&id)?).await?;
    Ok(Json(DeleteResult::new(rows)))
}
