//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{
    AuthResponse, ChangePasswordRequest, LoginRequest, SignupRequest, UpdateProfileRequest,
};
use crate::application::UserService;
use crate::domain::{Identity, PublicUser};
use crate::interfaces::http::common::{MessageResponse, ValidatedJson};
use crate::interfaces::http::error::{ApiResult, ErrorBody};

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing fields or email taken", body = ErrorBody),
        (status = 403, description = "Admin signup disabled", body = ErrorBody)
    )
)]
pub async fn signup(
    State(users): State<Arc<UserService>>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let result = users.signup(request.into()).await?;
    Ok((StatusCode::CREATED, Json(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = AuthResponse),
        (status = 401, description = "Invalid email or password", body = ErrorBody)
    )
)]
pub async fn login(
    State(users): State<Arc<UserService>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let result = users.login(&request.email, &request.password).await?;
    Ok(Json(result.into()))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = PublicUser),
        (status = 401, description = "Not authenticated", body = ErrorBody),
        (status = 404, description = "Account no longer exists", body = ErrorBody)
    )
)]
pub async fn me(
    State(users): State<Arc<UserService>>,
    Extension(identity): Extension<Identity>,
) -> ApiResult<Json<PublicUser>> {
    Ok(Json(users.me(&identity).await?))
}

#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated user", body = PublicUser),
        (status = 400, description = "Email already in use", body = ErrorBody)
    )
)]
pub async fn update_profile(
    State(users): State<Arc<UserService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<PublicUser>> {
    Ok(Json(users.update_profile(&identity, request.into()).await?))
}

#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = MessageResponse),
        (status = 400, description = "Missing password", body = ErrorBody),
        (status = 401, description = "Current password is incorrect", body = ErrorBody)
    )
)]
pub async fn change_password(
    State(users): State<Arc<UserService>>,
    Extension(identity): Extension<Identity>,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    users
        .change_password(&identity, &request.current_password, &request.new_password)
        .await?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
