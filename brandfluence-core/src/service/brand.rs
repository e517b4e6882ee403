use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, BrandListParams, BrandPatch, NewBrand, PageResult},
    entities::prelude::{BrandActiveModel, BrandModel},
    enums::common::UserRole,
};
use brandfluence_repository::BrandRepository;
use sea_orm::{IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct BrandService;

impl BrandService {
    #[instrument(name = "create-brand-profile", skip_all, fields(user_id = actor.user_id))]
    pub async fn create(ctx: &CoreContext, actor: &Actor, data: NewBrand) -> DomainResult<BrandModel> {
        actor.require_role(UserRole::Brand)?;
        if actor.brand_id().is_some() {
            return Err(DomainError::conflict("brand profile already exists"));
        }
        let mut am = data.into_active_model();
        am.user_id = Set(actor.user_id);
        let brand = BrandRepository::create(am, ctx.db()).await?;
        info!(brand_id = brand.id, "Brand profile created");
        Ok(brand)
    }

    pub async fn get_own(ctx: &CoreContext, actor: &Actor) -> DomainResult<BrandModel> {
        actor.require_role(UserRole::Brand)?;
        BrandRepository::find_by_user_id(actor.user_id, ctx.db())
            .await?
            .ok_or_else(|| DomainError::not_found("brand profile"))
    }

    #[instrument(name = "update-brand-profile", skip_all, fields(user_id = actor.user_id))]
    pub async fn update_own(
        ctx: &CoreContext,
        actor: &Actor,
        patch: BrandPatch,
    ) -> DomainResult<BrandModel> {
        if let Some(field) = patch.cleared_required() {
            return Err(DomainError::invalid(format!("{field} cannot be cleared")));
        }
        actor.require_role(UserRole::Brand)?;
        let user_id = actor.user_id;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let brand = BrandRepository::find_by_user_id(user_id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("brand profile"))?;
                    let mut am: BrandActiveModel = brand.into();
                    patch.apply_to(&mut am);
                    Ok(BrandRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    pub async fn get(ctx: &CoreContext, id: i32) -> DomainResult<BrandModel> {
        BrandRepository::find_by_id(id, ctx.db())
            .await?
            .ok_or_else(|| DomainError::not_found("brand"))
    }

    pub async fn list(
        ctx: &CoreContext,
        params: &BrandListParams,
    ) -> DomainResult<PageResult<BrandModel>> {
        Ok(BrandRepository::page(params, ctx.db()).await?)
    }
}
