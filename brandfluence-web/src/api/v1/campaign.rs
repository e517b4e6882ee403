//! Campaign endpoints, including the applications a campaign receives

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::{ApplicationService, CampaignService};
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{
        CampaignListParams, CampaignMetrics, CampaignPatch, NewApplication, NewCampaign,
        PageResult, PathId,
    },
    entities::prelude::{CampaignModel, DealApplicationModel},
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/campaigns";

/// Configure campaign routes
///
/// # Routes
/// - POST ``: Open a draft campaign (brand)
/// - GET ``: Campaigns visible to the caller; anonymous callers see all
/// - GET `/{id}`: Campaign detail, counts a view
/// - PUT `/{id}`: Patch a campaign (owner or admin)
/// - DELETE `/{id}`: Delete a campaign with everything attached to it
/// - PUT `/{id}/metrics`: Record performance counters (admin)
/// - POST `/{id}/applications`: Apply to a campaign (influencer)
/// - GET `/{id}/applications`: Applications received (owner or admin)
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(page))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete))
        .route("/{id}/metrics", web::put().to(record_metrics))
        .route("/{id}/applications", web::post().to(apply))
        .route("/{id}/applications", web::get().to(applications));
}

async fn create(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewCampaign>,
) -> WebResult<WebResponse<CampaignModel>> {
    let campaign = CampaignService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(campaign))
}

/// List campaigns
///
/// # Endpoint
/// `GET /api/v1/campaigns?status=&page=&page_size=`
///
/// # Authorization
/// Optional. Brands see their own campaigns, influencers the ones assigned
/// to them, admins and anonymous callers every campaign.
async fn page(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<CampaignListParams>,
) -> WebResult<WebResponse<PageResult<CampaignModel>>> {
    Ok(WebResponse::ok(
        CampaignService::list(state.core(), ctx.actor.as_ref(), &params).await?,
    ))
}

async fn get_by_id(
    state: Data<AppState>,
    req: Path<PathId>,
) -> WebResult<WebResponse<CampaignModel>> {
    Ok(WebResponse::ok(
        CampaignService::get(state.core(), req.id).await?,
    ))
}

async fn update(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    patch: Json<CampaignPatch>,
) -> WebResult<WebResponse<CampaignModel>> {
    let campaign =
        CampaignService::update(state.core(), ctx.actor()?, req.id, patch.into_inner()).await?;
    Ok(WebResponse::ok(campaign))
}

async fn delete(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<()>> {
    CampaignService::delete(state.core(), ctx.actor()?, req.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}

async fn record_metrics(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    metrics: Json<CampaignMetrics>,
) -> WebResult<WebResponse<CampaignModel>> {
    let campaign =
        CampaignService::record_metrics(state.core(), ctx.actor()?, req.id, metrics.into_inner())
            .await?;
    Ok(WebResponse::ok(campaign))
}

async fn apply(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    data: Json<NewApplication>,
) -> WebResult<WebResponse<DealApplicationModel>> {
    let application =
        ApplicationService::apply(state.core(), ctx.actor()?, req.id, data.into_inner()).await?;
    Ok(WebResponse::created(application))
}

async fn applications(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<Vec<DealApplicationModel>>> {
    Ok(WebResponse::ok(
        ApplicationService::list_for_campaign(state.core(), ctx.actor()?, req.id).await?,
    ))
}
