//! The session guard. The "session" carries no server-side state: the
//! cookie value is compared against the configured admin secret and nothing
//! else, so expiry is cookie max-age only and there is no logout operation.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::Settings;

pub const SESSION_COOKIE: &str = "adminAuth";

const SESSION_MAX_AGE: Duration = Duration::hours(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

/// Exact string comparison against the admin secret. No rate limiting or
/// lockout exists at this layer.
pub fn verify_password(candidate: &str, settings: &Settings) -> AuthState {
    if candidate == settings.admin_password {
        AuthState::Authenticated
    } else {
        AuthState::Unauthenticated
    }
}

/// Check the inbound cookie jar for a valid session token.
pub fn authenticate(jar: &CookieJar, settings: &Settings) -> AuthState {
    match jar.get(SESSION_COOKIE) {
        Some(cookie) => verify_password(cookie.value(), settings),
        None => AuthState::Unauthenticated,
    }
}

/// Build the session cookie issued on successful login. Secure is dropped
/// only in development so local HTTP keeps working.
pub fn session_cookie(settings: &Settings) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, settings.admin_password.clone()))
        .path("/")
        .http_only(true)
        .secure(!settings.is_development())
        .same_site(SameSite::Strict)
        .max_age(SESSION_MAX_AGE)
        .build()
}
