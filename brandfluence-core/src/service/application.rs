use super::{brand_user_id, ensure_campaign_owner, influencer_user_id, load_campaign};
use crate::{transitions, CoreContext};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, ApplicationReview, NewApplication, Notice},
    entities::prelude::{DealApplicationActiveModel, DealApplicationModel},
    enums::{
        common::{BudgetType, NotificationType},
        status::ApplicationStatus,
    },
};
use brandfluence_repository::{
    CampaignRepository, DealApplicationRepository, InfluencerRepository,
};
use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use tracing::{info, instrument};

pub struct ApplicationService;

impl ApplicationService {
    /// Files the acting influencer's bid on a campaign.
    ///
    /// The influencer's audience figures are snapshotted and the campaign's
    /// application counter is bumped in the same transaction.
    #[instrument(name = "apply-campaign", skip_all, fields(user_id = actor.user_id, campaign_id = campaign_id))]
    pub async fn apply(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
        data: NewApplication,
    ) -> DomainResult<DealApplicationModel> {
        let influencer_id = actor.require_influencer_profile()?;
        let (application, brand_user) = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(campaign_id, txn).await?;
                    if campaign.status.is_terminal() {
                        return Err(DomainError::invalid(format!(
                            "campaign is {} and no longer accepts applications",
                            campaign.status
                        )));
                    }
                    if let Some(amount) = data.quoted_amount {
                        if campaign.budget_negotiable != BudgetType::Negotiable {
                            return Err(DomainError::invalid(
                                "quoted_amount is only accepted on negotiable campaigns",
                            ));
                        }
                        if amount <= 0.0 {
                            return Err(DomainError::invalid("quoted_amount must be positive"));
                        }
                    }
                    if DealApplicationRepository::find_by_campaign_and_influencer(
                        campaign_id,
                        influencer_id,
                        txn,
                    )
                    .await?
                    .is_some()
                    {
                        return Err(DomainError::conflict(
                            "influencer already applied to this campaign",
                        ));
                    }
                    let influencer = InfluencerRepository::find_by_id(influencer_id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("influencer profile"))?;

                    let am = DealApplicationActiveModel {
                        campaign_id: Set(campaign_id),
                        influencer_id: Set(influencer_id),
                        status: Set(ApplicationStatus::Pending),
                        proposal_text: Set(data.proposal_text),
                        quoted_amount: Set(data.quoted_amount),
                        rate_card_url: Set(data.rate_card_url),
                        portfolio_items: Set(data.portfolio_items),
                        follower_count_at_application: Set(influencer.total_followers),
                        engagement_rate_at_application: Set(influencer.average_engagement_rate),
                        ..Default::default()
                    };
                    let application = DealApplicationRepository::create(am, txn).await?;
                    CampaignRepository::increment_application_count(campaign_id, txn).await?;
                    let brand_user = brand_user_id(campaign.brand_id, txn).await?;
                    Ok((application, brand_user))
                })
            })
            .await?;

        info!(application_id = application.id, "Application submitted");
        ctx.dispatch(vec![Notice::new(
            brand_user,
            NotificationType::NewApplication,
            "New application",
            "An influencer applied to your campaign",
        )
        .campaign(campaign_id)
        .application(application.id)])
            .await;
        Ok(application)
    }

    /// Records the owning brand's decision; approval assigns the applicant
    /// to the campaign.
    #[instrument(name = "review-application", skip_all, fields(user_id = actor.user_id, application_id = id))]
    pub async fn review(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        decision: ApplicationReview,
    ) -> DomainResult<DealApplicationModel> {
        let actor = *actor;
        let policy = ctx.policy();
        let (application, influencer_user) = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let application = load(id, txn).await?;
                    let campaign = load_campaign(application.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    transitions::application_review(policy, application.status, decision.status)?;

                    let mut am: DealApplicationActiveModel = application.into();
                    am.status = Set(decision.status);
                    am.reviewed_by = Set(Some(actor.user_id));
                    am.reviewed_at = Set(Some(Utc::now()));
                    if decision.rejection_reason.is_some() {
                        am.rejection_reason = Set(decision.rejection_reason);
                    }
                    if decision.notes.is_some() {
                        am.notes = Set(decision.notes);
                    }
                    let application = DealApplicationRepository::update(am, txn).await?;
                    if application.status == ApplicationStatus::Approved {
                        CampaignRepository::assign_influencer(
                            campaign.id,
                            application.influencer_id,
                            txn,
                        )
                        .await?;
                    }
                    let influencer_user = influencer_user_id(application.influencer_id, txn).await?;
                    Ok((application, influencer_user))
                })
            })
            .await?;

        let notice = match application.status {
            ApplicationStatus::Approved => Some((
                NotificationType::ApplicationApproved,
                "Application approved",
                "Your application was approved",
            )),
            ApplicationStatus::Rejected => Some((
                NotificationType::ApplicationRejected,
                "Application rejected",
                "Your application was rejected",
            )),
            _ => None,
        };
        if let Some((kind, title, message)) = notice {
            ctx.dispatch(vec![Notice::new(influencer_user, kind, title, message)
                .campaign(application.campaign_id)
                .application(application.id)])
                .await;
        }
        info!(status = %application.status, "Application reviewed");
        Ok(application)
    }

    #[instrument(name = "withdraw-application", skip_all, fields(user_id = actor.user_id, application_id = id))]
    pub async fn withdraw(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
    ) -> DomainResult<DealApplicationModel> {
        let influencer_id = actor.require_influencer_profile()?;
        let policy = ctx.policy();
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let application = load(id, txn).await?;
                    if application.influencer_id != influencer_id {
                        return Err(DomainError::forbidden(
                            "application belongs to another influencer",
                        ));
                    }
                    transitions::application_withdraw(policy, application.status)?;
                    let mut am: DealApplicationActiveModel = application.into();
                    am.status = Set(ApplicationStatus::Withdrawn);
                    Ok(DealApplicationRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Applications received by a campaign; owning brand or admin.
    pub async fn list_for_campaign(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
    ) -> DomainResult<Vec<DealApplicationModel>> {
        let campaign = load_campaign(campaign_id, ctx.db()).await?;
        ensure_campaign_owner(actor, &campaign, true)?;
        Ok(DealApplicationRepository::find_by_campaign(campaign_id, ctx.db()).await?)
    }

    /// The acting influencer's own applications.
    pub async fn list_own(
        ctx: &CoreContext,
        actor: &Actor,
    ) -> DomainResult<Vec<DealApplicationModel>> {
        let influencer_id = actor.require_influencer_profile()?;
        Ok(DealApplicationRepository::find_by_influencer(influencer_id, ctx.db()).await?)
    }
}

async fn load<C>(id: i32, db: &C) -> DomainResult<DealApplicationModel>
where
    C: sea_orm::ConnectionTrait,
{
    DealApplicationRepository::find_by_id(id, db)
        .await?
        .ok_or_else(|| DomainError::not_found("application"))
}
