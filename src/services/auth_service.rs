//! Authentication service - Handles user authentication and authorization.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! SOLID (ISP): Trait contains only auth methods, password handling in domain.
//! DDD: Uses domain Password value object for hashing.
//! DDD: Uses Unit of Work for repository access.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{NewUser, Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub employee_id: Option<Uuid>,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
///
/// SOLID (ISP): Contains only account and credential operations.
/// Password hashing is handled by domain::Password value object.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Login and return JWT token
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Get the account behind an authenticated identity
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Verify the current credential and store a new one
    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()>;

    /// Create the bootstrap admin account if it does not exist yet.
    /// Returns true when an account was created.
    async fn ensure_admin(&self) -> AppResult<bool>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        username: user.username.clone(),
        role: user.role.to_string(),
        employee_id: user.employee_id,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_username(&username).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid usernames.
        // We use a dummy hash that will always fail verification.
        let dummy_hash = "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = match &user_result {
            Some(user) => user.password_hash.as_str(),
            None => dummy_hash,
        };

        // DDD: Use Password value object for verification
        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        match user_result {
            Some(user) if password_valid => generate_token(&user, &self.config),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn change_password(
        &self,
        user_id: Uuid,
        current_password: String,
        new_password: String,
    ) -> AppResult<()> {
        let user = self
            .uow
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotFound)?;

        let stored_password = Password::from_hash(user.password_hash.clone());
        if !stored_password.verify(&current_password) {
            return Err(AppError::InvalidCredentials);
        }

        // DDD: Use Password value object for hashing
        let new_hash = Password::new(&new_password)?.into_string();
        self.uow.users().update_password(user.id, new_hash).await
    }

    async fn ensure_admin(&self) -> AppResult<bool> {
        let username = self.config.admin_username.clone();
        if self.uow.users().find_by_username(&username).await?.is_some() {
            return Ok(false);
        }

        let password_hash = Password::new(&self.config.admin_password)?.into_string();
        self.uow
            .users()
            .create(NewUser {
                username,
                password_hash,
                role: UserRole::Admin,
                employee_id: None,
            })
            .await?;

        Ok(true)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: Password::new("password123").unwrap().into_string(),
            role,
            employee_id: Some(Uuid::new_v4()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_round_trip() {
        let config = Config::for_tests();
        let user = test_user(UserRole::Employee);

        let token = generate_token(&user, &config).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, config.jwt_expiration_hours * 3600);

        let claims = verify_token_internal(&token.access_token, &config).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, "employee");
        assert_eq!(claims.employee_id, user.employee_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_admin_claims_carry_no_employee_link() {
        let config = Config::for_tests();
        let mut user = test_user(UserRole::Admin);
        user.employee_id = None;

        let token = generate_token(&user, &config).unwrap();
        let claims = verify_token_internal(&token.access_token, &config).unwrap();
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.employee_id, None);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let config = Config::for_tests();
        assert!(verify_token_internal("not-a-token", &config).is_err());
    }
}
