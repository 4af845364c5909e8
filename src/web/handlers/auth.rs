//! Authentication handlers: signup, login, logout.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;

use crate::auth::{hash_password, validation, verify_password};
use crate::db::{NewUser, UserRepository, UserStore};
use crate::web::dto::{ApiResponse, LoginRequest, LoginResponse, SignupRequest, UserInfo};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// POST /api/auth/signup - Create an account.
///
/// Checks run in order: field presence, nickname uniqueness, nickname
/// format, password rules, password confirmation. The first violated rule
/// determines the response, before any store mutation.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), ApiError> {
    validation::validate_signup_presence(&req.nickname, &req.password, &req.password_confirm)?;

    let users = UserRepository::new(state.db.pool());
    if users.nickname_exists(&req.nickname).await? {
        return Err(ApiError::conflict("nickname is already in use"));
    }

    validation::validate_nickname(&req.nickname)?;
    validation::validate_password(&req.password, &req.nickname)?;
    validation::validate_password_confirm(&req.password, &req.password_confirm)?;

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Failed to hash password: {}", e);
        ApiError::internal("failed to create user")
    })?;

    // The UNIQUE constraint still backs the pre-check above; a racing signup
    // surfaces here as a conflict.
    let user = users.insert(&NewUser::new(&req.nickname, password_hash)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(UserInfo {
            id: user.id,
            nickname: user.nickname,
        })),
    ))
}

/// POST /api/auth/login - Verify credentials and set the token cookie.
///
/// The cookie is HttpOnly with Path=/ and no Secure/SameSite attributes.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    validation::validate_login(&req.nickname, &req.password)?;

    let users = UserRepository::new(state.db.pool());
    let user = users
        .find_by_nickname(&req.nickname)
        .await?
        .ok_or_else(|| ApiError::validation("please check your nickname or password"))?;

    verify_password(&req.password, &user.password)
        .map_err(|_| ApiError::validation("please check your nickname or password"))?;

    let token = state.tokens.issue(user.id, &user.nickname).map_err(|e| {
        tracing::error!("Failed to issue token: {}", e);
        ApiError::internal("failed to issue token")
    })?;

    let cookie = Cookie::build((state.cookie_name.clone(), token))
        .http_only(true)
        .path("/")
        .build();

    let response = LoginResponse {
        nickname: user.nickname,
        expires_in: state.tokens.expiry_secs(),
    };

    Ok((jar.add(cookie), Json(ApiResponse::new(response))))
}

/// GET /api/auth/logout - Clear the token cookie.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    let mut cookie = Cookie::new(state.cookie_name.clone(), "");
    cookie.set_path("/");

    (jar.remove(cookie), Json(ApiResponse::new(())))
}
