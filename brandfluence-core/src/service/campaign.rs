use super::{ensure_campaign_owner, ensure_influencer_exists, load_campaign};
use crate::{transitions, CoreContext};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{
        Actor, ActorKind, CampaignListParams, CampaignMetrics, CampaignPatch, NewCampaign,
        PageResult,
    },
    entities::prelude::{CampaignActiveModel, CampaignModel, MilestoneTemplates},
};
use brandfluence_repository::{
    CampaignRepository, CampaignScope, ContentRepository, DealApplicationRepository,
    MessageRepository, MilestoneRepository, NotificationRepository, PaymentRepository,
    TaskRepository,
};
use chrono::{DateTime, Utc};
use sea_orm::{IntoActiveModel, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct CampaignService;

impl CampaignService {
    /// Opens a draft campaign for the acting brand with zeroed metrics.
    #[instrument(name = "create-campaign", skip_all, fields(user_id = actor.user_id))]
    pub async fn create(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewCampaign,
    ) -> DomainResult<CampaignModel> {
        let brand_id = actor.require_brand_profile()?;
        if data.budget <= 0.0 {
            return Err(DomainError::invalid("budget must be positive"));
        }
        if data.required_follower_count < 0 {
            return Err(DomainError::invalid(
                "required_follower_count must not be negative",
            ));
        }
        check_template(&data.milestones_template)?;
        check_dates(data.start_date, data.end_date)?;

        let mut am = data.into_active_model();
        am.brand_id = Set(brand_id);
        am.influencer_id = Set(None);
        am.status = Set(Default::default());
        am.impressions = Set(0);
        am.clicks = Set(0);
        am.conversions = Set(0);
        am.engagement_rate = Set(0.0);
        am.view_count = Set(0);
        am.application_count = Set(0);
        let campaign = CampaignRepository::create(am, ctx.db()).await?;
        info!(campaign_id = campaign.id, brand_id, "Campaign created");
        Ok(campaign)
    }

    /// Public detail view; each read counts as a view.
    pub async fn get(ctx: &CoreContext, id: i32) -> DomainResult<CampaignModel> {
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    load_campaign(id, txn).await?;
                    CampaignRepository::increment_view_count(id, txn).await?;
                    load_campaign(id, txn).await
                })
            })
            .await
            .map_err(DomainError::from)
    }

    #[instrument(name = "update-campaign", skip_all, fields(user_id = actor.user_id, campaign_id = id))]
    pub async fn update(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        patch: CampaignPatch,
    ) -> DomainResult<CampaignModel> {
        let actor = *actor;
        let policy = ctx.policy();
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;

                    if patch.budget.is_some_and(|b| b <= 0.0) {
                        return Err(DomainError::invalid("budget must be positive"));
                    }
                    if patch.required_follower_count.is_some_and(|c| c < 0) {
                        return Err(DomainError::invalid(
                            "required_follower_count must not be negative",
                        ));
                    }
                    if let Some(template) = &patch.milestones_template {
                        check_template(template)?;
                    }
                    check_dates(
                        patch.start_date.unwrap_or(campaign.start_date),
                        patch.end_date.unwrap_or(campaign.end_date),
                    )?;
                    if let Some(Some(influencer_id)) = patch.influencer_id {
                        ensure_influencer_exists(influencer_id, txn).await?;
                    }

                    let status = patch.status;
                    let mut am: CampaignActiveModel = campaign.clone().into();
                    if let Some(to) = status {
                        transitions::campaign(policy, campaign.status, to)?;
                        am.status = Set(to);
                    }
                    patch.apply_to(&mut am);
                    Ok(CampaignRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Lists campaigns visible to the caller.
    ///
    /// Brands see their own, influencers the ones assigned to them, admins
    /// and anonymous callers everything. A missing profile yields an empty page.
    pub async fn list(
        ctx: &CoreContext,
        actor: Option<&Actor>,
        params: &CampaignListParams,
    ) -> DomainResult<PageResult<CampaignModel>> {
        let scope = match actor.map(|a| a.kind) {
            None | Some(ActorKind::Admin) => Some(CampaignScope::All),
            Some(ActorKind::Brand { brand_id }) => brand_id.map(CampaignScope::Brand),
            Some(ActorKind::Influencer { influencer_id }) => {
                influencer_id.map(CampaignScope::Influencer)
            }
        };
        let page = params.page.normalized();
        match scope {
            Some(scope) => {
                Ok(CampaignRepository::page(scope, params.status, page, ctx.db()).await?)
            }
            None => Ok(PageResult::empty(page)),
        }
    }

    /// Deletes a campaign with every dependent row in one transaction.
    #[instrument(name = "delete-campaign", skip_all, fields(user_id = actor.user_id, campaign_id = id))]
    pub async fn delete(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<()> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;

                    let contents = ContentRepository::delete_by_campaign(id, txn).await?;
                    let tasks = TaskRepository::delete_by_campaign(id, txn).await?;
                    let payments = PaymentRepository::delete_by_campaign(id, txn).await?;
                    NotificationRepository::detach_campaign(id, txn).await?;
                    let milestones = MilestoneRepository::delete_by_campaign(id, txn).await?;
                    let applications =
                        DealApplicationRepository::delete_by_campaign(id, txn).await?;
                    MessageRepository::detach_campaign(id, txn).await?;
                    CampaignRepository::delete(id, txn).await?;

                    info!(
                        contents,
                        tasks, payments, milestones, applications, "Campaign deleted"
                    );
                    Ok(())
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Overwrites performance counters; administrators only.
    #[instrument(name = "record-campaign-metrics", skip_all, fields(campaign_id = id))]
    pub async fn record_metrics(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        metrics: CampaignMetrics,
    ) -> DomainResult<CampaignModel> {
        actor.require_admin()?;
        let negative = [metrics.impressions, metrics.clicks, metrics.conversions]
            .iter()
            .flatten()
            .any(|v| *v < 0)
            || metrics.engagement_rate.is_some_and(|r| r < 0.0);
        if negative {
            return Err(DomainError::invalid("metrics must not be negative"));
        }
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(id, txn).await?;
                    let mut am: CampaignActiveModel = campaign.into();
                    metrics.apply_to(&mut am);
                    Ok(CampaignRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }
}

fn check_template(template: &MilestoneTemplates) -> DomainResult<()> {
    if template
        .0
        .iter()
        .any(|t| t.payout_percentage <= 0.0 || t.payout_percentage > 100.0)
    {
        return Err(DomainError::invalid(
            "template payout_percentage must be within (0, 100]",
        ));
    }
    if template.total_percentage() > 100.0 {
        return Err(DomainError::invalid(
            "template payout percentages must not exceed 100 in total",
        ));
    }
    Ok(())
}

fn check_dates(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> DomainResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if end < start => {
            Err(DomainError::invalid("end_date must not precede start_date"))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandfluence_models::entities::prelude::MilestoneTemplate;
    use chrono::Duration;

    fn template(pcts: &[f64]) -> MilestoneTemplates {
        MilestoneTemplates(
            pcts.iter()
                .map(|p| MilestoneTemplate {
                    title: format!("step {p}"),
                    payout_percentage: *p,
                })
                .collect(),
        )
    }

    #[test]
    fn test_template_bounds() {
        assert!(check_template(&template(&[])).is_ok());
        assert!(check_template(&template(&[40.0, 60.0])).is_ok());
        assert!(check_template(&template(&[0.0])).is_err());
        assert!(check_template(&template(&[60.0, 50.0])).is_err());
        assert!(check_template(&template(&[100.5])).is_err());
    }

    #[test]
    fn test_date_order() {
        let now = Utc::now();
        assert!(check_dates(Some(now), Some(now + Duration::days(1))).is_ok());
        assert!(check_dates(Some(now), None).is_ok());
        assert!(check_dates(Some(now), Some(now - Duration::days(1))).is_err());
    }
}
