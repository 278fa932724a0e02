//! DTO definitions for registration, login, and session introspection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dao::models::UserEntity,
    dto::{format_system_time, validation::validate_username},
};

/// Payload to create an account.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RegisterRequest {
    /// Login handle; lowercase slug, unique.
    #[validate(custom(function = validate_username))]
    pub username: String,
    /// Contact address, unique.
    #[validate(email)]
    pub email: String,
    /// Optional public name; defaults to the username.
    #[validate(length(min = 1, max = 80))]
    pub display_name: Option<String>,
    /// Plaintext password, hashed before storage.
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Payload to open a session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Login handle.
    #[validate(length(min = 1))]
    pub username: String,
    /// Plaintext password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Authenticated user returned by register/login/me.
#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct UserResponse {
    /// Stable identifier.
    pub id: Uuid,
    /// Login handle.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Public display name.
    pub display_name: String,
    /// RFC 3339 account creation timestamp.
    pub created_at: String,
}

impl From<UserEntity> for UserResponse {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            display_name: entity.display_name,
            created_at: format_system_time(entity.created_at),
        }
    }
}
