mod application;
mod brand;
mod campaign;
mod content;
mod influencer;
mod message;
mod milestone;
mod notification;
mod payment;
mod task;
mod user;

pub use application::ApplicationService;
pub use brand::BrandService;
pub use campaign::CampaignService;
pub use content::ContentService;
pub use influencer::InfluencerService;
pub use message::MessageService;
pub use milestone::MilestoneService;
pub use notification::NotificationService;
pub use payment::PaymentService;
pub use task::TaskService;
pub use user::UserService;

use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, ActorKind},
    entities::prelude::{CampaignModel, TaskModel},
};
use brandfluence_repository::{
    BrandRepository, CampaignRepository, InfluencerRepository, TaskRepository,
};
use sea_orm::ConnectionTrait;

pub(crate) async fn load_campaign<C>(id: i32, db: &C) -> DomainResult<CampaignModel>
where
    C: ConnectionTrait,
{
    CampaignRepository::find_by_id(id, db)
        .await?
        .ok_or_else(|| DomainError::not_found("campaign"))
}

pub(crate) async fn load_task<C>(id: i32, db: &C) -> DomainResult<TaskModel>
where
    C: ConnectionTrait,
{
    TaskRepository::find_by_id(id, db)
        .await?
        .ok_or_else(|| DomainError::not_found("task"))
}

pub(crate) async fn ensure_influencer_exists<C>(id: i32, db: &C) -> DomainResult<()>
where
    C: ConnectionTrait,
{
    if InfluencerRepository::exists_by_id(id, db).await? {
        Ok(())
    } else {
        Err(DomainError::not_found("influencer"))
    }
}

/// User account behind a brand profile
pub(crate) async fn brand_user_id<C>(brand_id: i32, db: &C) -> DomainResult<i32>
where
    C: ConnectionTrait,
{
    BrandRepository::find_by_id(brand_id, db)
        .await?
        .map(|b| b.user_id)
        .ok_or_else(|| DomainError::not_found("brand"))
}

/// User account behind an influencer profile
pub(crate) async fn influencer_user_id<C>(influencer_id: i32, db: &C) -> DomainResult<i32>
where
    C: ConnectionTrait,
{
    InfluencerRepository::find_by_id(influencer_id, db)
        .await?
        .map(|i| i.user_id)
        .ok_or_else(|| DomainError::not_found("influencer"))
}

/// The owning brand of `campaign`; admins pass when `allow_admin`.
pub(crate) fn ensure_campaign_owner(
    actor: &Actor,
    campaign: &CampaignModel,
    allow_admin: bool,
) -> DomainResult<()> {
    match actor.kind {
        ActorKind::Admin if allow_admin => Ok(()),
        ActorKind::Brand { .. } => {
            if actor.require_brand_profile()? == campaign.brand_id {
                Ok(())
            } else {
                Err(DomainError::forbidden("campaign belongs to another brand"))
            }
        }
        _ => Err(DomainError::forbidden("only the owning brand may do this")),
    }
}

/// Owning brand, assigned influencer or admin
pub(crate) fn is_campaign_party(actor: &Actor, campaign: &CampaignModel) -> bool {
    match actor.kind {
        ActorKind::Admin => true,
        ActorKind::Brand { brand_id } => brand_id == Some(campaign.brand_id),
        ActorKind::Influencer { influencer_id } => {
            influencer_id.is_some() && influencer_id == campaign.influencer_id
        }
    }
}
