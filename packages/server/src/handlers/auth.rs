use axum::{Json, extract::State};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AUTH_COOKIE;
use crate::extractors::json::AppJson;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Lifetime of the admin session cookie.
const COOKIE_MAX_AGE: time::Duration = time::Duration::weeks(1);

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Exchange the admin key for a session cookie",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Cookie set", body = LoginResponse),
        (status = 401, description = "Invalid key (TOKEN_INVALID)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let admin_key = &state.config.auth.admin_key;
    if admin_key.is_empty() || payload.key != *admin_key {
        return Err(AppError::TokenInvalid);
    }

    // Secure only when the site is served over https; a hard `true` would
    // make local http development drop the cookie.
    let secure = state.config.server.public_base_url.starts_with("https://");

    let cookie = Cookie::build((AUTH_COOKIE, payload.key))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .max_age(COOKIE_MAX_AGE)
        .build();

    Ok((jar.add(cookie), Json(LoginResponse { success: true })))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Auth",
    operation_id = "logout",
    summary = "Clear the admin session cookie",
    responses(
        (status = 200, description = "Cookie cleared", body = LoginResponse),
    ),
)]
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LoginResponse>) {
    let removal = Cookie::build((AUTH_COOKIE, "")).path("/").build();
    (jar.remove(removal), Json(LoginResponse { success: true }))
}
