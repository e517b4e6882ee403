//! Credential verification and actor resolution.

use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, Claims},
    entities::prelude::UserModel,
    enums::common::UserRole,
    settings::Jwt,
};
use brandfluence_repository::{BrandRepository, InfluencerRepository, UserRepository};
use brandfluence_utils::jwt::{decode_jwt, encode_jwt};
use sea_orm::ConnectionTrait;
use tracing::{debug, instrument};

/// Turns a bearer credential into the identity it was issued for.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `(user_id, role)` or `Unauthenticated`.
    fn verify(&self, credential: &str) -> DomainResult<(i32, UserRole)>;
}

/// HS256 tokens carrying [`Claims`].
#[derive(Debug, Clone)]
pub struct JwtVerifier {
    secret: String,
    issuer: String,
    expire: i64,
}

impl JwtVerifier {
    pub fn new(jwt: &Jwt) -> Self {
        Self {
            secret: jwt.secret.clone(),
            issuer: jwt.issuer.clone(),
            expire: jwt.expire,
        }
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn expire(&self) -> i64 {
        self.expire
    }

    pub fn issue(&self, user_id: i32, role: UserRole) -> DomainResult<String> {
        let claims = Claims::new(self.issuer.clone(), user_id, role, self.expire);
        encode_jwt(&claims, self.secret.as_bytes()).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign token");
            DomainError::Unauthenticated
        })
    }
}

impl CredentialVerifier for JwtVerifier {
    fn verify(&self, credential: &str) -> DomainResult<(i32, UserRole)> {
        let data = decode_jwt::<Claims>(credential, self.secret.as_bytes(), &self.issuer)
            .map_err(|e| {
                debug!(error = %e, "Rejected credential");
                DomainError::Unauthenticated
            })?;
        Ok((data.claims.user_id, data.claims.role))
    }
}

pub struct IdentityService;

impl IdentityService {
    /// Verifies `credential` and loads the acting user with its profile id.
    ///
    /// The role comes from storage; the token only names the user.
    #[instrument(name = "resolve-actor", skip_all)]
    pub async fn resolve<V, C>(verifier: &V, credential: &str, db: &C) -> DomainResult<Actor>
    where
        V: CredentialVerifier + ?Sized,
        C: ConnectionTrait,
    {
        let (user_id, _) = verifier.verify(credential)?;
        let user = UserRepository::find_by_id(user_id, db)
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        Self::actor_for(&user, db).await
    }

    /// Builds the actor of an already loaded account.
    pub async fn actor_for<C>(user: &UserModel, db: &C) -> DomainResult<Actor>
    where
        C: ConnectionTrait,
    {
        if !user.is_active {
            return Err(DomainError::InactiveAccount);
        }
        Ok(match user.role {
            UserRole::Brand => Actor::brand(
                user.id,
                BrandRepository::find_by_user_id(user.id, db)
                    .await?
                    .map(|b| b.id),
            ),
            UserRole::Influencer => Actor::influencer(
                user.id,
                InfluencerRepository::find_by_user_id(user.id, db)
                    .await?
                    .map(|i| i.id),
            ),
            UserRole::Admin => Actor::admin(user.id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_verify() {
        let verifier = JwtVerifier::new(&Jwt::default());
        let token = verifier.issue(7, UserRole::Brand).unwrap();
        assert_eq!(verifier.verify(&token).unwrap(), (7, UserRole::Brand));
    }

    #[test]
    fn test_garbage_and_foreign_tokens_are_unauthenticated() {
        let verifier = JwtVerifier::new(&Jwt::default());
        assert!(matches!(
            verifier.verify("not-a-token"),
            Err(DomainError::Unauthenticated)
        ));

        let other = JwtVerifier::new(&Jwt {
            secret: "another-secret".into(),
            ..Jwt::default()
        });
        let token = other.issue(1, UserRole::Admin).unwrap();
        assert!(matches!(
            verifier.verify(&token),
            Err(DomainError::Unauthenticated)
        ));
    }
}
