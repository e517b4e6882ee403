//! Direct and campaign thread messages

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::MessageService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{MessageListParams, NewMessage, PageResult, PathId},
    entities::prelude::MessageModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/messages";

/// Configure message routes
///
/// # Routes
/// - POST ``: Send a direct message or post to a campaign thread
/// - GET `/inbox`: Messages addressed to the caller
/// - GET `/sent`: Messages sent by the caller
/// - GET `/campaign/{id}`: Campaign thread (parties only)
/// - PUT `/{id}/read`: Mark a received message read
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(send))
        .route("/inbox", web::get().to(inbox))
        .route("/sent", web::get().to(sent))
        .route("/campaign/{id}", web::get().to(campaign_thread))
        .route("/{id}/read", web::put().to(mark_read));
}

async fn send(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewMessage>,
) -> WebResult<WebResponse<MessageModel>> {
    let message = MessageService::send(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(message))
}

async fn inbox(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<MessageListParams>,
) -> WebResult<WebResponse<PageResult<MessageModel>>> {
    Ok(WebResponse::ok(
        MessageService::inbox(state.core(), ctx.actor()?, &params).await?,
    ))
}

async fn sent(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<MessageListParams>,
) -> WebResult<WebResponse<PageResult<MessageModel>>> {
    Ok(WebResponse::ok(
        MessageService::sent(state.core(), ctx.actor()?, &params).await?,
    ))
}

async fn campaign_thread(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    params: Query<MessageListParams>,
) -> WebResult<WebResponse<PageResult<MessageModel>>> {
    Ok(WebResponse::ok(
        MessageService::campaign_thread(state.core(), ctx.actor()?, req.id, &params).await?,
    ))
}

async fn mark_read(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<MessageModel>> {
    Ok(WebResponse::ok(
        MessageService::mark_read(state.core(), ctx.actor()?, req.id).await?,
    ))
}
