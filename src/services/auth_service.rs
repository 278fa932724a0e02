use std::time::SystemTime;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::warn;
use uuid::Uuid;

use crate::{
    dao::models::{NewUserEntity, SessionEntity, UserEntity},
    dto::auth::{LoginRequest, RegisterRequest, UserResponse},
    error::ServiceError,
    state::SharedState,
};

/// Create an account and immediately open a session for it.
pub async fn register(
    state: &SharedState,
    request: RegisterRequest,
) -> Result<(UserResponse, Uuid), ServiceError> {
    let store = state.require_sprite_store().await?;

    if store
        .find_user_by_username(request.username.clone())
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "username `{}` is already taken",
            request.username
        )));
    }
    if store
        .find_user_by_email(request.email.clone())
        .await?
        .is_some()
    {
        return Err(ServiceError::Conflict(format!(
            "email `{}` is already registered",
            request.email
        )));
    }

    let password_hash = hash_password(&request.password)?;
    let display_name = request
        .display_name
        .unwrap_or_else(|| request.username.clone());

    let user = store
        .create_user(NewUserEntity {
            username: request.username,
            email: request.email,
            display_name,
            password_hash,
        })
        .await?;

    let token = open_session(state, &user).await?;
    Ok((user.into(), token))
}

/// Verify credentials and open a session.
pub async fn login(
    state: &SharedState,
    request: LoginRequest,
) -> Result<(UserResponse, Uuid), ServiceError> {
    let store = state.require_sprite_store().await?;

    let Some(user) = store.find_user_by_username(request.username.clone()).await? else {
        return Err(invalid_credentials());
    };
    if !verify_password(&request.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = open_session(state, &user).await?;
    Ok((user.into(), token))
}

/// Close a session; unknown tokens are ignored so logout stays idempotent.
pub async fn logout(state: &SharedState, token: Uuid) -> Result<(), ServiceError> {
    state.sessions().remove(&token);
    let store = state.require_sprite_store().await?;
    store.delete_session(token).await?;
    Ok(())
}

/// Resolve the user behind a session token, or fail with `Unauthorized`.
pub async fn authenticate(state: &SharedState, token: Uuid) -> Result<Uuid, ServiceError> {
    let now = SystemTime::now();

    if let Some(session) = state.sessions().get(&token) {
        if session.expires_at > now {
            return Ok(session.user_id);
        }
        drop(session);
        state.sessions().remove(&token);
        purge_session(state, token).await;
        return Err(expired_session());
    }

    let store = state.require_sprite_store().await?;
    let Some(session) = store.find_session(token).await? else {
        return Err(ServiceError::Unauthorized("invalid session".into()));
    };
    if session.expires_at <= now {
        purge_session(state, token).await;
        return Err(expired_session());
    }

    let user_id = session.user_id;
    state.sessions().insert(token, session);
    Ok(user_id)
}

/// Soft variant of [`authenticate`] used to decorate read-only requests:
/// any failure just means "anonymous".
pub async fn session_user(state: &SharedState, token: Option<Uuid>) -> Option<Uuid> {
    match token {
        Some(token) => authenticate(state, token).await.ok(),
        None => None,
    }
}

/// Full profile of the session user.
pub async fn current_user(state: &SharedState, token: Uuid) -> Result<UserResponse, ServiceError> {
    let user_id = authenticate(state, token).await?;
    let store = state.require_sprite_store().await?;
    let Some(user) = store.find_user(user_id).await? else {
        // Session outlived the account; treat it like any dead session.
        state.sessions().remove(&token);
        return Err(ServiceError::Unauthorized("invalid session".into()));
    };
    Ok(user.into())
}

async fn open_session(state: &SharedState, user: &UserEntity) -> Result<Uuid, ServiceError> {
    let store = state.require_sprite_store().await?;

    let now = SystemTime::now();
    let session = SessionEntity {
        token: Uuid::new_v4(),
        user_id: user.id,
        created_at: now,
        expires_at: now + state.config().session_ttl(),
    };

    store.insert_session(session.clone()).await?;
    let token = session.token;
    state.sessions().insert(token, session);
    Ok(token)
}

/// Best-effort removal of a dead session row.
async fn purge_session(state: &SharedState, token: Uuid) {
    if let Ok(store) = state.require_sprite_store().await {
        if let Err(err) = store.delete_session(token).await {
            warn!(error = %err, "failed to purge expired session");
        }
    }
}

fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| ServiceError::Internal(format!("failed to hash password: {err}")))
}

fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn invalid_credentials() -> ServiceError {
    ServiceError::Unauthorized("invalid username or password".into())
}

fn expired_session() -> ServiceError {
    ServiceError::Unauthorized("session expired".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState, testkit::StubStore};
    use std::sync::Arc;
    use std::time::Duration;

    fn register_request(username: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            email: email.into(),
            display_name: None,
            password: "correct horse battery".into(),
        }
    }

    async fn state_with_store() -> crate::state::SharedState {
        let state = AppState::new(AppConfig::default());
        state.set_sprite_store(Arc::new(StubStore::default())).await;
        state
    }

    #[tokio::test]
    async fn register_opens_a_working_session() {
        let state = state_with_store().await;
        let (user, token) = register(&state, register_request("alice", "a@example.com"))
            .await
            .unwrap();
        assert_eq!(user.display_name, "alice");

        let me = current_user(&state, token).await.unwrap();
        assert_eq!(me.username, "alice");
    }

    #[tokio::test]
    async fn duplicate_username_conflicts() {
        let state = state_with_store().await;
        register(&state, register_request("alice", "a@example.com"))
            .await
            .unwrap();
        let result = register(&state, register_request("alice", "other@example.com")).await;
        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let state = state_with_store().await;
        register(&state, register_request("alice", "a@example.com"))
            .await
            .unwrap();

        let result = login(
            &state,
            LoginRequest {
                username: "alice".into(),
                password: "wrong password!".into(),
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn expired_sessions_are_rejected_and_purged() {
        let state = state_with_store().await;
        let token = Uuid::new_v4();
        let stale = SessionEntity {
            token,
            user_id: Uuid::new_v4(),
            created_at: SystemTime::now() - Duration::from_secs(120),
            expires_at: SystemTime::now() - Duration::from_secs(60),
        };
        state.sessions().insert(token, stale);

        let result = authenticate(&state, token).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized(_))));
        assert!(!state.sessions().contains_key(&token));
    }

    #[tokio::test]
    async fn logout_invalidates_the_token() {
        let state = state_with_store().await;
        let (_, token) = register(&state, register_request("alice", "a@example.com"))
            .await
            .unwrap();

        logout(&state, token).await.unwrap();
        assert!(authenticate(&state, token).await.is_err());
    }
}
