use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the admin session cookie.
pub const AUTH_COOKIE: &str = "admin_auth";

/// Admin capability check extracted from `Authorization: Bearer <key>` or the
/// `admin_auth` cookie.
///
/// Add this as a handler parameter to require admin access. There is a single
/// shared key and no per-user accounts.
#[derive(Debug)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin_key = state.config.auth.admin_key.as_str();
        if admin_key.is_empty() {
            // Misconfiguration must not open the admin surface.
            return Err(AppError::TokenInvalid);
        }

        if let Some(header) = parts.headers.get("Authorization") {
            let value = header.to_str().map_err(|_| AppError::TokenInvalid)?;
            let token = value.strip_prefix("Bearer ").ok_or(AppError::TokenInvalid)?;
            if token == admin_key {
                return Ok(AdminAuth);
            }
            return Err(AppError::TokenInvalid);
        }

        let jar = CookieJar::from_headers(&parts.headers);
        match jar.get(AUTH_COOKIE) {
            Some(cookie) if cookie.value() == admin_key => Ok(AdminAuth),
            Some(_) => Err(AppError::TokenInvalid),
            None => Err(AppError::TokenMissing),
        }
    }
}
