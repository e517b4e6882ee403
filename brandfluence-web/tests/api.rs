use actix_web::{
    http::{header::AUTHORIZATION, StatusCode},
    test, App,
};
use brandfluence_core::{CoreContext, JwtVerifier};
use brandfluence_models::settings::{Jwt, TransitionPolicy};
use brandfluence_web::{configure_app, AppState};
use serde_json::{json, Value};
use std::sync::Once;
use tracing::Level;

const PREFIX: &str = "/api/v1";

static INIT_TRACING: Once = Once::new();

fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .without_time()
            .try_init();
    });
}

async fn state() -> AppState {
    init_tracing();
    let db = brandfluence_storage::init_memory_db()
        .await
        .expect("in-memory database");
    AppState::new(
        CoreContext::with_stored_notifier(db, TransitionPolicy::Strict),
        JwtVerifier::new(&Jwt::default()),
    )
}

fn url(path: &str) -> String {
    format!("{PREFIX}{path}")
}

fn register_request(username: &str, role: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri(&url("/auth/register"))
        .set_json(json!({
            "email": format!("{username}@example.com"),
            "username": username,
            "password": "password123",
            "role": role,
        }))
}

/// Registers an account and evaluates to its bearer header value.
macro_rules! signup {
    ($app:expr, $username:expr, $role:expr) => {{
        let req = register_request($username, $role).to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri(&url("/auth/login"))
            .set_json(json!({ "username": $username, "password": "password123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json($app, req).await;
        format!("Bearer {}", body["data"]["token"].as_str().unwrap())
    }};
}

#[actix_web::test]
async fn test_health_is_outside_prefix() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_authentication_boundary() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;

    let req = test::TestRequest::get().uri(&url("/auth/me")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&url("/auth/me"))
        .insert_header((AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = signup!(&app, "acme", "brand");
    let req = test::TestRequest::get()
        .uri(&url("/auth/me"))
        .insert_header((AUTHORIZATION, token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["username"], "acme");
    assert_eq!(body["data"]["role"], "brand");
    assert!(body["data"].get("hashed_password").is_none());

    // discovery is open to anonymous callers
    let req = test::TestRequest::get().uri(&url("/campaigns")).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 0);
}

#[actix_web::test]
async fn test_register_rejects_admin_and_duplicates() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;
    signup!(&app, "acme", "brand");

    let resp = test::call_service(&app, register_request("acme", "brand").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let resp = test::call_service(&app, register_request("root", "admin").to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_campaign_flow_over_http() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;
    let brand = signup!(&app, "acme", "brand");
    let influencer = signup!(&app, "ivy", "influencer");

    let req = test::TestRequest::post()
        .uri(&url("/brands/me"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({ "company_name": "Acme Inc" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri(&url("/influencers/me"))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({ "full_name": "Ivy Doe", "total_followers": 500 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let campaign = json!({
        "title": "Spring launch",
        "budget": 0,
        "deadline": "2030-01-01T00:00:00Z",
    });
    let req = test::TestRequest::post()
        .uri(&url("/campaigns"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(&campaign)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let mut campaign = campaign;
    campaign["budget"] = json!(1000);
    let req = test::TestRequest::post()
        .uri(&url("/campaigns"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(&campaign)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "draft");
    let campaign_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&url(&format!("/campaigns/{campaign_id}/applications")))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["follower_count_at_application"], 500);
    let application_id = body["data"]["id"].as_i64().unwrap();

    // applicants cannot decide their own application
    let req = test::TestRequest::put()
        .uri(&url(&format!("/applications/{application_id}/review")))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({ "status": "approved" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&url(&format!("/applications/{application_id}/review")))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({ "status": "approved" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "approved");

    let req = test::TestRequest::get()
        .uri(&url("/notifications?unread_only=true"))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["records"][0]["notification_type"], "application_approved");

    // strict policy: a campaign cannot fall back to draft
    let req = test::TestRequest::put()
        .uri(&url(&format!("/campaigns/{campaign_id}")))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({ "status": "active" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let req = test::TestRequest::put()
        .uri(&url(&format!("/campaigns/{campaign_id}")))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({ "status": "draft" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::delete()
        .uri(&url(&format!("/campaigns/{campaign_id}")))
        .insert_header((AUTHORIZATION, brand))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let req = test::TestRequest::get()
        .uri(&url(&format!("/campaigns/{campaign_id}")))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_task_patch_cannot_move_campaign() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;
    let brand = signup!(&app, "acme", "brand");

    let req = test::TestRequest::put()
        .uri(&url("/tasks/1"))
        .insert_header((AUTHORIZATION, brand))
        .set_json(json!({ "campaign_id": 2 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_content_submitted_against_task_path() {
    let state = state().await;
    let app =
        test::init_service(App::new().configure(|cfg| configure_app(cfg, &state, PREFIX))).await;
    let brand = signup!(&app, "acme", "brand");
    let influencer = signup!(&app, "ivy", "influencer");

    let req = test::TestRequest::post()
        .uri(&url("/brands/me"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({ "company_name": "Acme Inc" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    let req = test::TestRequest::post()
        .uri(&url("/influencers/me"))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({ "full_name": "Ivy Doe" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let influencer_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&url("/campaigns"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({
            "title": "Spring launch",
            "budget": 1000,
            "deadline": "2030-01-01T00:00:00Z",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let campaign_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&url("/tasks"))
        .insert_header((AUTHORIZATION, brand.clone()))
        .set_json(json!({
            "campaign_id": campaign_id,
            "influencer_id": influencer_id,
            "title": "Unboxing reel",
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let task_id = body["data"]["id"].as_i64().unwrap();

    // the task comes from the route, so the body may not name one
    let req = test::TestRequest::post()
        .uri(&url(&format!("/content/task/{task_id}")))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({ "task_id": task_id, "title": "Reel", "content_type": "video" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&url(&format!("/content/task/{task_id}")))
        .insert_header((AUTHORIZATION, brand))
        .set_json(json!({ "title": "Reel", "content_type": "video" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::post()
        .uri(&url(&format!("/content/task/{task_id}")))
        .insert_header((AUTHORIZATION, influencer.clone()))
        .set_json(json!({ "title": "Reel", "content_type": "video" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["task_id"], task_id);
    assert_eq!(body["data"]["status"], "draft");

    let req = test::TestRequest::get()
        .uri(&url(&format!("/content/task/{task_id}")))
        .insert_header((AUTHORIZATION, influencer))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["title"], "Reel");
}
