use axum::{Json, Router, extract::State, http::StatusCode, routing::get, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::auth::{LoginRequest, RegisterRequest, UserResponse},
    error::AppError,
    services::auth_service,
    state::SharedState,
};

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "sprite_forge_session";

/// Account and session endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created and session opened", body = UserResponse),
        (status = 409, description = "Username or email already taken")
    )
)]
/// Create an account and log it in.
pub async fn register(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<UserResponse>), AppError> {
    payload.validate()?;
    let (user, token) = auth_service::register(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        jar.add(session_cookie(token)),
        Json(user),
    ))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = UserResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
/// Verify credentials and open a session.
pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<UserResponse>), AppError> {
    payload.validate()?;
    let (user, token) = auth_service::login(&state, payload).await?;
    Ok((jar.add(session_cookie(token)), Json(user)))
}

#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Session closed"))
)]
/// Close the current session and clear the cookie.
pub async fn logout(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<(StatusCode, CookieJar), AppError> {
    if let Some(token) = session_token(&jar) {
        auth_service::logout(&state, token).await?;
    }

    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    Ok((StatusCode::NO_CONTENT, jar.remove(removal)))
}

#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current session user", body = UserResponse),
        (status = 401, description = "No valid session")
    )
)]
/// Return the user behind the current session.
pub async fn me(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<Json<UserResponse>, AppError> {
    let token = session_token(&jar)
        .ok_or_else(|| AppError::Unauthorized("missing session cookie".into()))?;
    let user = auth_service::current_user(&state, token).await?;
    Ok(Json(user))
}

/// Read the session token from the cookie jar, if any.
pub(crate) fn session_token(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
}

/// Resolve the session user or fail with `401`, for write endpoints.
pub(crate) async fn require_user(
    state: &SharedState,
    jar: &CookieJar,
) -> Result<Uuid, AppError> {
    let token = session_token(jar)
        .ok_or_else(|| AppError::Unauthorized("missing session cookie".into()))?;
    Ok(auth_service::authenticate(state, token).await?)
}

fn session_cookie(token: Uuid) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_same_site(SameSite::Lax);
    cookie
}
