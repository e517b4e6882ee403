#![allow(dead_code)]

use brandfluence_core::{service::*, CoreContext, Notifier};
use brandfluence_models::{
    domain::prelude::{
        Actor, NewBrand, NewCampaign, NewInfluencer, NewTask, RegisterRequest,
    },
    entities::prelude::{CampaignModel, TaskModel},
    enums::common::UserRole,
    settings::{Admin, TransitionPolicy},
};
use brandfluence_repository::UserRepository;
use serde_json::json;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_TRACING: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

/// Fresh in-memory marketplace with the stored notifier.
pub async fn setup() -> CoreContext {
    setup_with(TransitionPolicy::Strict).await
}

pub async fn setup_with(policy: TransitionPolicy) -> CoreContext {
    init_tracing();
    let db = brandfluence_storage::init_memory_db()
        .await
        .expect("in-memory database");
    CoreContext::with_stored_notifier(db, policy)
}

pub async fn setup_with_notifier(notifier: Arc<dyn Notifier>) -> CoreContext {
    init_tracing();
    let db = brandfluence_storage::init_memory_db()
        .await
        .expect("in-memory database");
    CoreContext::new(db, notifier, TransitionPolicy::Strict)
}

pub async fn register(ctx: &CoreContext, username: &str, role: UserRole) -> Actor {
    let user = UserService::register(
        ctx,
        RegisterRequest {
            email: format!("{username}@example.com"),
            username: username.to_string(),
            password: "password123".to_string(),
            role,
        },
    )
    .await
    .expect("register");
    UserService::actor(ctx, user.id).await.expect("actor")
}

/// Brand account with a profile
pub async fn brand(ctx: &CoreContext, username: &str) -> Actor {
    let actor = register(ctx, username, UserRole::Brand).await;
    let data: NewBrand = serde_json::from_value(json!({
        "company_name": format!("{username} Inc"),
        "industry": "Fashion",
        "location": "Berlin",
    }))
    .unwrap();
    BrandService::create(ctx, &actor, data).await.expect("brand profile");
    UserService::actor(ctx, actor.user_id).await.unwrap()
}

/// Influencer account with a profile
pub async fn influencer(ctx: &CoreContext, username: &str, followers: i64) -> Actor {
    let actor = register(ctx, username, UserRole::Influencer).await;
    let data: NewInfluencer = serde_json::from_value(json!({
        "full_name": format!("{username} Doe"),
        "niche": "Beauty",
        "location": "Paris",
        "total_followers": followers,
        "average_engagement_rate": 3.5,
    }))
    .unwrap();
    InfluencerService::create(ctx, &actor, data)
        .await
        .expect("influencer profile");
    UserService::actor(ctx, actor.user_id).await.unwrap()
}

pub async fn admin(ctx: &CoreContext) -> Actor {
    let admin = Admin {
        enabled: true,
        ..Admin::default()
    };
    UserService::ensure_admin(ctx, &admin).await.unwrap();
    let user = UserRepository::find_by_username(&admin.username, ctx.db())
        .await
        .unwrap()
        .unwrap();
    UserService::actor(ctx, user.id).await.unwrap()
}

pub fn new_campaign(budget: f64) -> NewCampaign {
    serde_json::from_value(json!({
        "title": "Spring launch",
        "budget": budget,
        "deadline": "2030-01-01T00:00:00Z",
        "platforms": ["instagram"],
        "deliverables": ["1 reel"],
    }))
    .unwrap()
}

pub async fn campaign(ctx: &CoreContext, brand: &Actor, budget: f64) -> CampaignModel {
    CampaignService::create(ctx, brand, new_campaign(budget))
        .await
        .expect("campaign")
}

pub async fn task(
    ctx: &CoreContext,
    brand: &Actor,
    campaign_id: i32,
    influencer: &Actor,
) -> TaskModel {
    let data: NewTask = serde_json::from_value(json!({
        "campaign_id": campaign_id,
        "influencer_id": influencer.influencer_id().unwrap(),
        "title": "Shoot the reel",
    }))
    .unwrap();
    TaskService::create(ctx, brand, data).await.expect("task")
}
