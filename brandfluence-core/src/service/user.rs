use crate::{identity::IdentityService, CoreContext, JwtVerifier};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    constants::{BEARER_TOKEN, MIN_PASSWORD_LEN},
    domain::prelude::{Actor, LoginRequest, LoginResponse, NewUser, RegisterRequest, UserInfo},
    entities::prelude::UserActiveModel,
    enums::common::UserRole,
    settings::Admin,
};
use brandfluence_repository::UserRepository;
use brandfluence_utils::hash::{bcrypt_check, bcrypt_hash};
use sea_orm::{ConnectionTrait, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct UserService;

impl UserService {
    /// Creates a brand or influencer account.
    #[instrument(name = "register", skip_all, fields(username = %req.username))]
    pub async fn register(ctx: &CoreContext, req: RegisterRequest) -> DomainResult<UserInfo> {
        if req.role == UserRole::Admin {
            return Err(DomainError::invalid("role must be brand or influencer"));
        }
        if (req.password.chars().count() as u64) < MIN_PASSWORD_LEN {
            return Err(DomainError::invalid(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        let user = NewUser {
            hashed_password: hash_password(&req.password)?,
            email: req.email,
            username: req.username,
            role: req.role,
            is_verified: false,
        };
        let created = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    if UserRepository::exists_by_username_or_email(&user.username, &user.email, txn)
                        .await?
                    {
                        return Err(DomainError::conflict("username or email already registered"));
                    }
                    Self::insert(user, txn).await
                })
            })
            .await?;
        info!(user_id = created.id, role = %created.role, "Account registered");
        Ok(created)
    }

    #[instrument(name = "login", skip_all, fields(login = %req.username))]
    pub async fn login(
        ctx: &CoreContext,
        verifier: &JwtVerifier,
        req: LoginRequest,
    ) -> DomainResult<LoginResponse> {
        let user = UserRepository::find_by_login(&req.username, ctx.db())
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        if !bcrypt_check(&req.password, &user.hashed_password) {
            return Err(DomainError::Unauthenticated);
        }
        if !user.is_active {
            return Err(DomainError::InactiveAccount);
        }
        Ok(LoginResponse {
            token: verifier.issue(user.id, user.role)?,
            token_type: BEARER_TOKEN.to_string(),
            expires_in: verifier.expire(),
            user_id: user.id,
            role: user.role,
        })
    }

    pub async fn me(ctx: &CoreContext, actor: &Actor) -> DomainResult<UserInfo> {
        UserRepository::find_by_id(actor.user_id, ctx.db())
            .await?
            .map(UserInfo::from)
            .ok_or(DomainError::Unauthenticated)
    }

    /// Resolves the actor of a freshly authenticated account.
    pub async fn actor(ctx: &CoreContext, user_id: i32) -> DomainResult<Actor> {
        let user = UserRepository::find_by_id(user_id, ctx.db())
            .await?
            .ok_or(DomainError::Unauthenticated)?;
        IdentityService::actor_for(&user, ctx.db()).await
    }

    /// Creates the configured administrator unless the username is taken.
    ///
    /// Returns whether an account was created.
    #[instrument(name = "ensure-admin", skip_all)]
    pub async fn ensure_admin(ctx: &CoreContext, admin: &Admin) -> DomainResult<bool> {
        if !admin.enabled {
            return Ok(false);
        }
        let user = NewUser {
            email: admin.email.clone(),
            username: admin.username.clone(),
            hashed_password: hash_password(&admin.password)?,
            role: UserRole::Admin,
            is_verified: true,
        };
        let created = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    if UserRepository::find_by_username(&user.username, txn)
                        .await?
                        .is_some()
                    {
                        return Ok(None);
                    }
                    Ok(Some(Self::insert(user, txn).await?))
                })
            })
            .await?;
        match created {
            Some(created) => {
                info!(user_id = created.id, "Bootstrap administrator created");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert<C>(user: NewUser, db: &C) -> DomainResult<UserInfo>
    where
        C: ConnectionTrait,
    {
        let am = UserActiveModel {
            email: Set(user.email),
            username: Set(user.username),
            hashed_password: Set(user.hashed_password),
            role: Set(user.role),
            is_active: Set(true),
            is_verified: Set(user.is_verified),
            ..Default::default()
        };
        Ok(UserRepository::create(am, db).await?.into())
    }
}

fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt_hash(password).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        DomainError::invalid("password cannot be hashed")
    })
}
