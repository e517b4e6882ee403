use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::Json;
use brandfluence_core::service::UserService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{LoginRequest, LoginResponse, RegisterRequest, UserInfo},
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/auth";

/// Configure authentication routes
///
/// # Routes
/// - POST `/register`: Create a brand or influencer account
/// - POST `/login`: Exchange credentials for a bearer token
/// - GET `/me`: Account of the caller
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login))
        .route("/me", web::get().to(me));
}

async fn register(
    state: Data<AppState>,
    req: Json<RegisterRequest>,
) -> WebResult<WebResponse<UserInfo>> {
    let user = UserService::register(state.core(), req.into_inner()).await?;
    Ok(WebResponse::created(user))
}

/// Login endpoint
///
/// # Endpoint
/// `POST /api/v1/auth/login`
///
/// `username` accepts either the username or the email address.
async fn login(
    state: Data<AppState>,
    req: Json<LoginRequest>,
) -> WebResult<WebResponse<LoginResponse>> {
    let response = UserService::login(state.core(), state.verifier(), req.into_inner()).await?;
    Ok(WebResponse::ok(response))
}

async fn me(state: Data<AppState>, ctx: RequestContext) -> WebResult<WebResponse<UserInfo>> {
    let user = UserService::me(state.core(), ctx.actor()?).await?;
    Ok(WebResponse::ok(user))
}
