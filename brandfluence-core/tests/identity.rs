mod common;

use brandfluence_core::{service::UserService, IdentityService, JwtVerifier};
use brandfluence_error::domain::DomainError;
use brandfluence_models::{
    domain::prelude::{ActorKind, LoginRequest, RegisterRequest},
    enums::common::UserRole,
    settings::Jwt,
};
use common::*;

fn login(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn test_login_then_resolve() {
    let ctx = setup().await;
    let verifier = JwtVerifier::new(&Jwt::default());
    let brand = brand(&ctx, "acme").await;

    let response = UserService::login(&ctx, &verifier, login("acme", "password123"))
        .await
        .unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.user_id, brand.user_id);

    let actor = IdentityService::resolve(&verifier, &response.token, ctx.db())
        .await
        .unwrap();
    assert_eq!(actor, brand);
    assert!(matches!(actor.kind, ActorKind::Brand { brand_id: Some(_) }));

    // email works as the login name too
    UserService::login(&ctx, &verifier, login("acme@example.com", "password123"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_bad_credentials() {
    let ctx = setup().await;
    let verifier = JwtVerifier::new(&Jwt::default());
    influencer(&ctx, "ivy", 100).await;

    let err = UserService::login(&ctx, &verifier, login("ivy", "wrong-password"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));
    let err = UserService::login(&ctx, &verifier, login("nobody", "password123"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));

    let err = IdentityService::resolve(&verifier, "not-a-token", ctx.db())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));

    let foreign = JwtVerifier::new(&Jwt {
        secret: "another-secret".into(),
        ..Jwt::default()
    });
    let token = foreign.issue(1, UserRole::Admin).unwrap();
    let err = IdentityService::resolve(&verifier, &token, ctx.db())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthenticated));
}

#[tokio::test]
async fn test_registration_rules() {
    let ctx = setup().await;
    register(&ctx, "acme", UserRole::Brand).await;

    let request = |username: &str, password: &str, role| RegisterRequest {
        email: format!("{username}@example.com"),
        username: username.into(),
        password: password.into(),
        role,
    };
    let err = UserService::register(&ctx, request("acme", "password123", UserRole::Brand))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));

    let err = UserService::register(&ctx, request("root", "password123", UserRole::Admin))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    let err = UserService::register(&ctx, request("shorty", "short", UserRole::Influencer))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[tokio::test]
async fn test_profile_is_resolved_after_creation() {
    let ctx = setup().await;
    let bare = register(&ctx, "ivy", UserRole::Influencer).await;
    assert_eq!(bare.influencer_id(), None);
    assert!(matches!(
        bare.require_influencer_profile(),
        Err(DomainError::NotFound(_))
    ));

    let admin = admin(&ctx).await;
    assert!(admin.is_admin());
    let me = UserService::me(&ctx, &admin).await.unwrap();
    assert_eq!(me.role, UserRole::Admin);
    assert!(me.is_verified);
}
