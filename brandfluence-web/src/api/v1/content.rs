use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path};
use brandfluence_core::service::ContentService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{ContentPatch, ContentUpload, NewContent, PathId},
    entities::prelude::ContentModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/content";

/// Configure content routes
///
/// # Routes
/// - POST ``: Submit the deliverable of a task named in the body (assignee)
/// - POST `/task/{id}`: Submit the deliverable of the task in the path (assignee)
/// - GET `/task/{id}`: Content of a task
/// - GET `/{id}`: Content detail
/// - PUT `/{id}`: Edit (assignee) or review (brand)
/// - DELETE `/{id}`: Remove content (assignee or admin)
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(submit))
        .route("/task/{id}", web::post().to(submit_for_task))
        .route("/task/{id}", web::get().to(get_by_task))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

async fn submit(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewContent>,
) -> WebResult<WebResponse<ContentModel>> {
    let content = ContentService::submit(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(content))
}

async fn submit_for_task(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    data: Json<ContentUpload>,
) -> WebResult<WebResponse<ContentModel>> {
    let data = data.into_inner().for_task(req.id);
    let content = ContentService::submit(state.core(), ctx.actor()?, data).await?;
    Ok(WebResponse::created(content))
}

async fn get_by_task(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<ContentModel>> {
    Ok(WebResponse::ok(
        ContentService::get_by_task(state.core(), ctx.actor()?, req.id).await?,
    ))
}

async fn get_by_id(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<ContentModel>> {
    Ok(WebResponse::ok(
        ContentService::get(state.core(), ctx.actor()?, req.id).await?,
    ))
}

async fn update(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    patch: Json<ContentPatch>,
) -> WebResult<WebResponse<ContentModel>> {
    let content =
        ContentService::update(state.core(), ctx.actor()?, req.id, patch.into_inner()).await?;
    Ok(WebResponse::ok(content))
}

async fn delete(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<()>> {
    ContentService::delete(state.core(), ctx.actor()?, req.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}
