use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Path, Query};
use brandfluence_core::service::NotificationService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{NotificationListParams, PageResult, PathId},
    entities::prelude::NotificationModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/notifications";

/// Configure notification routes
///
/// # Routes
/// - GET `?unread_only=&page=&page_size=`: The caller's notifications, newest first
/// - PUT `/read-all`: Mark every notification read; returns the number changed
/// - PUT `/{id}/read`: Mark one notification read
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("/read-all", web::put().to(mark_all_read))
        .route("/{id}/read", web::put().to(mark_read));
}

async fn page(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<NotificationListParams>,
) -> WebResult<WebResponse<PageResult<NotificationModel>>> {
    Ok(WebResponse::ok(
        NotificationService::list(state.core(), ctx.actor()?, &params).await?,
    ))
}

async fn mark_read(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<NotificationModel>> {
    Ok(WebResponse::ok(
        NotificationService::mark_read(state.core(), ctx.actor()?, req.id).await?,
    ))
}

async fn mark_all_read(
    state: Data<AppState>,
    ctx: RequestContext,
) -> WebResult<WebResponse<u64>> {
    Ok(WebResponse::ok(
        NotificationService::mark_all_read(state.core(), ctx.actor()?).await?,
    ))
}
