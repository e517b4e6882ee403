use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path};
use brandfluence_core::service::ApplicationService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{ApplicationReview, PathId},
    entities::prelude::DealApplicationModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/applications";

/// Configure application routes
///
/// # Routes
/// - GET `/me`: The caller's own applications (influencer)
/// - PUT `/{id}/review`: Approve, reject or negotiate (owner or admin)
/// - PUT `/{id}/withdraw`: Withdraw an open application (applicant)
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(list_own))
        .route("/{id}/review", web::put().to(review))
        .route("/{id}/withdraw", web::put().to(withdraw));
}

async fn list_own(
    state: Data<AppState>,
    ctx: RequestContext,
) -> WebResult<WebResponse<Vec<DealApplicationModel>>> {
    Ok(WebResponse::ok(
        ApplicationService::list_own(state.core(), ctx.actor()?).await?,
    ))
}

async fn review(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    decision: Json<ApplicationReview>,
) -> WebResult<WebResponse<DealApplicationModel>> {
    let application =
        ApplicationService::review(state.core(), ctx.actor()?, req.id, decision.into_inner())
            .await?;
    Ok(WebResponse::ok(application))
}

async fn withdraw(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<DealApplicationModel>> {
    Ok(WebResponse::ok(
        ApplicationService::withdraw(state.core(), ctx.actor()?, req.id).await?,
    ))
}
