//! Brand profile endpoints

use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data};
use actix_web_validator::{Json, Path, Query};
use brandfluence_core::service::BrandService;
use brandfluence_error::WebResult;
use brandfluence_models::{
    domain::prelude::{BrandListParams, BrandPatch, NewBrand, PageResult, PathId},
    entities::prelude::BrandModel,
    web::WebResponse,
};

pub(super) const ROUTER_PREFIX: &str = "/brands";

/// Configure brand routes
///
/// # Routes
/// - POST `/me`: Create the caller's brand profile
/// - GET `/me`: The caller's brand profile
/// - PUT `/me`: Patch the caller's brand profile
/// - GET ``: Paginated discovery, filterable by industry and location
/// - GET `/{id}`: Public brand profile
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
    data: Json<NewBrand>,
) -> WebResult<WebResponse<BrandModel>> {
    let brand = BrandService::create(state.core(), ctx.actor()?, data.into_inner()).await?;
    Ok(WebResponse::created(brand))
}

async fn get_own(state: Data<AppState>, ctx: RequestContext) -> WebResult<WebResponse<BrandModel>> {
    Ok(WebResponse::ok(
        BrandService::get_own(state.core(), ctx.actor()?).await?,
    ))
}

async fn update_own(
    state: Data<AppState>,
    ctx: RequestContext,
    patch: Json<BrandPatch>,
) -> WebResult<WebResponse<BrandModel>> {
    let brand = BrandService::update_own(state.core(), ctx.actor()?, patch.into_inner()).await?;
    Ok(WebResponse::ok(brand))
}

async fn page(
    state: Data<AppState>,
    params: Query<BrandListParams>,
) -> WebResult<WebResponse<PageResult<BrandModel>>> {
    Ok(WebResponse::ok(
        BrandService::list(state.core(), &params).await?,
    ))
}

async fn get_by_id(
    state: Data<AppState>,
    req: Path<PathId>,
) -> WebResult<WebResponse<BrandModel>> {
    Ok(WebResponse::ok(BrandService::get(state.core(), req.id).await?))
}
