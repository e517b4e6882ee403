//! Influencer profile endpoints

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::InfluencerService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{InfluencerListParams, InfluencerPatch, NewInfluencer, PageResult, PathId},
    entities::prelude::InfluencerModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/influencers";

/// Configure influencer routes
///
/// # Routes
/// - POST/GET/PUT `/me`: The caller's influencer profile
/// - GET ``: Paginated discovery by niche, location and `min_followers`
/// - GET `/{id}`: Public influencer profile
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::post().to(create))
        .route("/me", web::get().to(get_own))
        .route("/me", web::put().to(update_own))
        .route("", web::get().to(page))
        .route("/{id}", web::get().to(get_by_id));
}

async fn create(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewInfluencer>,
) -> WebResult<WebResponse<InfluencerModel>> {
    let influencer =
        InfluencerService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(influencer))
}

async fn get_own(
    state: Data<AppState>,
    ctx: RequestContext,
) -> WebResult<WebResponse<InfluencerModel>> {
    Ok(WebResponse::ok(
        InfluencerService::get_own(state.core(), ctx.actor()?).await?,
    ))
}

async fn update_own(
    state: Data<AppState>,
    ctx: RequestContext,
    patch: Json<InfluencerPatch>,
) -> WebResult<WebResponse<InfluencerModel>> {
    let influencer =
        InfluencerService::update_own(state.core(), ctx.actor()?, patch.into_inner()).await?;
    Ok(WebResponse::ok(influencer))
}

async fn page(
    state: Data<AppState>,
    params: Query<InfluencerListParams>,
) -> WebResult<WebResponse<PageResult<InfluencerModel>>> {
    Ok(WebResponse::ok(
        InfluencerService::list(state.core(), &params).await?,
    ))
}

async fn get_by_id(
    state: Data<AppState>,
    req: Path<PathId>,
) -> WebResult<WebResponse<InfluencerModel>> {
    Ok(WebResponse::ok(
        InfluencerService::get(state.core(), req.id).await?,
    ))
}
