use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::PaymentService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{CampaignScopeParams, NewPayment, PathId, PaymentStatusChange},
    entities::prelude::PaymentModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/payments";

/// Configure payment routes
///
/// # Routes
/// - POST ``: Record a payment against a campaign
/// - GET `?campaign_id=`: Payments of a campaign
/// - PUT `/{id}/status`: Move a payment along its status graph
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(list))
        .route("/{id}/status", web::put().to(transition));
}

async fn create(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewPayment>,
) -> WebResult<WebResponse<PaymentModel>> {
    let payment = PaymentService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(payment))
}

async fn list(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<CampaignScopeParams>,
) -> WebResult<WebResponse<Vec<PaymentModel>>> {
    Ok(WebResponse::ok(
        PaymentService::list(state.core(), ctx.actor()?, params.campaign_id).await?,
    ))
}

async fn transition(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    change: Json<PaymentStatusChange>,
) -> WebResult<WebResponse<PaymentModel>> {
    let payment =
        PaymentService::transition(state.core(), ctx.actor()?, req.id, change.into_inner())
            .await?;
    Ok(WebResponse::ok(payment))
}
