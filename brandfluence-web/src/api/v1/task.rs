//! Task board endpoints

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::TaskService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{NewTask, PathId, TaskListParams, TaskPatch},
    entities::prelude::TaskModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/tasks";

/// Configure task routes
///
/// # Routes
/// - POST ``: Create a task on an owned campaign
/// - GET ``: Board listing scoped to the caller, filterable by campaign and status
/// - GET `/{id}`: Task detail
/// - PUT `/{id}`: Patch a task; assignees may only move the card
/// - DELETE `/{id}`: Delete a task and its content
pub(crate) fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(list))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

async fn create(
    state: Data<AppState>,
    ctx: RequestContext,
    data: Json<NewTask>,
) -> WebResult<WebResponse<TaskModel>> {
    let task = TaskService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(task))
}

async fn list(
    state: Data<AppState>,
    ctx: RequestContext,
    params: Query<TaskListParams>,
) -> WebResult<WebResponse<Vec<TaskModel>>> {
    Ok(WebResponse::ok(
        TaskService::list(state.core(), ctx.actor()?, &params).await?,
    ))
}

async fn get_by_id(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<TaskModel>> {
    Ok(WebResponse::ok(
        TaskService::get(state.core(), ctx.actor()?, req.id).await?,
    ))
}

async fn update(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
    patch: Json<TaskPatch>,
) -> WebResult<WebResponse<TaskModel>> {
    let task = TaskService::update(state.core(), ctx.actor()?, req.id, patch.into_inner()).await?;
    Ok(WebResponse::ok(task))
}

async fn delete(
    state: Data<AppState>,
    ctx: RequestContext,
    req: Path<PathId>,
) -> WebResult<WebResponse<()>> {
    TaskService::delete(state.core(), ctx.actor()?, req.id).await?;
    Ok(WebResponse::<()>::ok_empty())
}
