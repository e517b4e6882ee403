//! Milestone ledger endpoints

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::MilestoneService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{
        CampaignScopeParams, MilestonePaymentConfirmation, MilestoneProof, MilestoneReview,
        NewMilestone, PathId,
    },
    entities::prelude::MilestoneModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/milestones";

/// Configure milestone routes
///
/// # Routes
/// - POST ``: Create a milestone by amount or payout percentage
/// - GET `?campaign_id=`: Milestones of a campaign
/// - POST `/from-template/{id}`: Instantiate the campaign's milestone template
/// - PUT `/{id}/start`: Begin work (assignee)
/// - PUT `/{id}/proof`: Submit proof of delivery (assignee)
/// - PUT `/{id}/review`: Approve or reject (owning brand)
/// - PUT `/{id}/payment`: Confirm the payout (owning brand)
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(list))
        .route("/from-template/{id}", web::post().to(create_from_template))
        .route("/{id}/start", web::put().to(start))
        .route("/{id}/proof", web::put().to(submit_proof))
        .route("/{id}/review", web::put().to(review))
        .route("/{id}/payment", web::put().to(confirm_payment));
}

async fn create(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewMilestone>,
) -> WebResult<WebResponse<MilestoneModel>> {
    let milestone = MilestoneService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(milestone))
}

async fn list(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<CampaignScopeParams>,
) -> WebResult<WebResponse<Vec<MilestoneModel>>> {
    Ok(WebResponse::ok(
        MilestoneService::list(state.core(), ctx.actor()?, params.campaign_id).await?,
    ))
}

async fn create_from_template(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<Vec<MilestoneModel>>> {
    let milestones =
        MilestoneService::create_from_template(state.core(), ctx.actor()?, req.id).await?;
    Ok(WebResponse::created(milestones))
}

async fn start(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<MilestoneModel>> {
    Ok(WebResponse::ok(
        MilestoneService::start(state.core(), ctx.actor()?, req.id).await?,
    ))
}

async fn submit_proof(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    proof: Json<MilestoneProof>,
) -> WebResult<WebResponse<MilestoneModel>> {
    let milestone =
        MilestoneService::submit_proof(state.core(), ctx.actor()?, req.id, proof.into_inner())
            .await?;
    Ok(WebResponse::ok(milestone))
}

async fn review(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    decision: Json<MilestoneReview>,
) -> WebResult<WebResponse<MilestoneModel>> {
    let milestone =
        MilestoneService::review(state.core(), ctx.actor()?, req.id, decision.into_inner())
            .await?;
    Ok(WebResponse::ok(milestone))
}

async fn confirm_payment(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    confirmation: Json<MilestonePaymentConfirmation>,
) -> WebResult<WebResponse<MilestoneModel>> {
    let milestone = MilestoneService::confirm_payment(
        state.core(),
        ctx.actor()?,
        req.id,
        confirmation.into_inner(),
    )
    .await?;
    Ok(WebResponse::ok(milestone))
}
