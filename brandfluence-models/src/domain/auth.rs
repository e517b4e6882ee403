use crate::{constants::MIN_PASSWORD_LEN, enums::common::UserRole};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 3, max = 128, message = "username must be 3-128 characters"))]
    pub username: String,
    #[validate(length(min = MIN_PASSWORD_LEN, message = "password must be at least 8 characters"))]
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: i32,
    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub jti: String,
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub nbf: i64,
    pub iat: i64,
    pub user_id: i32,
    pub role: UserRole,
}

impl Claims {
    pub fn new(iss: String, user_id: i32, role: UserRole, expire_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            jti: Uuid::new_v4().to_string(),
            sub: user_id.to_string(),
            iss,
            exp: now + expire_secs,
            nbf: now,
            iat: now,
            user_id,
            role,
        }
    }
}
