use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, InfluencerListParams, InfluencerPatch, NewInfluencer, PageResult},
    entities::prelude::{InfluencerActiveModel, InfluencerModel},
    enums::common::UserRole,
};
use brandfluence_repository::InfluencerRepository;
use sea_orm::{IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct InfluencerService;

impl InfluencerService {
    #[instrument(name = "create-influencer-profile", skip_all, fields(user_id = actor.user_id))]
    pub async fn create(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewInfluencer,
    ) -> DomainResult<InfluencerModel> {
        actor.require_role(UserRole::Influencer)?;
        if actor.influencer_id().is_some() {
            return Err(DomainError::conflict("influencer profile already exists"));
        }
        if data.total_followers < 0 || data.average_engagement_rate < 0.0 {
            return Err(DomainError::invalid("audience figures must not be negative"));
        }
        let mut am = data.into_active_model();
        am.user_id = Set(actor.user_id);
        let influencer = InfluencerRepository::create(am, ctx.db()).await?;
        info!(influencer_id = influencer.id, "Influencer profile created");
        Ok(influencer)
    }

    pub async fn get_own(ctx: &CoreContext, actor: &Actor) -> DomainResult<InfluencerModel> {
        actor.require_role(UserRole::Influencer)?;
        InfluencerRepository::find_by_user_id(actor.user_id, ctx.db())
            .await?
            .ok_or_else(|| DomainError::not_found("influencer profile"))
    }

    #[instrument(name = "update-influencer-profile", skip_all, fields(user_id = actor.user_id))]
    pub async fn update_own(
        ctx: &CoreContext,
        actor: &Actor,
        patch: InfluencerPatch,
    ) -> DomainResult<InfluencerModel> {
        if let Some(field) = patch.cleared_required() {
            return Err(DomainError::invalid(format!("{field} cannot be cleared")));
        }
        if let Some(field) = patch.negative_field() {
            return Err(DomainError::invalid(format!("{field} must not be negative")));
        }
        actor.require_role(UserRole::Influencer)?;
        let user_id = actor.user_id;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let influencer = InfluencerRepository::find_by_user_id(user_id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("influencer profile"))?;
                    let mut am: InfluencerActiveModel = influencer.into();
                    patch.apply_to(&mut am);
                    Ok(InfluencerRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    pub async fn get(ctx: &CoreContext, id: i32) -> DomainResult<InfluencerModel> {
        InfluencerRepository::find_by_id(id, ctx.db())
            .await?
            .ok_or_else(|| DomainError::not_found("influencer"))
    }

    pub async fn list(
        ctx: &CoreContext,
        params: &InfluencerListParams,
    ) -> DomainResult<PageResult<InfluencerModel>> {
        Ok(InfluencerRepository::page(params, ctx.db()).await?)
    }
}
