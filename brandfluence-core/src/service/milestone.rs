use super::{
    ensure_campaign_owner, ensure_influencer_exists, influencer_user_id, load_campaign,
};
use crate::{round2, transitions, CoreContext};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{
        Actor, ActorKind, MilestonePaymentConfirmation, MilestoneProof, MilestoneReview,
        NewMilestone, Notice,
    },
    entities::prelude::{MilestoneActiveModel, MilestoneModel, StringList},
    enums::{
        common::{NotificationType, PaymentConfirmation},
        status::MilestoneStatus,
    },
};
use brandfluence_repository::MilestoneRepository;
use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, Set, TransactionTrait};
use tracing::{info, instrument};

pub struct MilestoneService;

impl MilestoneService {
    /// Creates a payout checkpoint.
    ///
    /// A percentage is converted into an amount against the campaign budget
    /// once, here; later budget edits leave the amount untouched.
    #[instrument(name = "create-milestone", skip_all, fields(user_id = actor.user_id, campaign_id = data.campaign_id))]
    pub async fn create(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewMilestone,
    ) -> DomainResult<MilestoneModel> {
        let actor = *actor;
        let milestone = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(data.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    ensure_influencer_exists(data.influencer_id, txn).await?;

                    let amount = match (data.amount, data.payout_percentage) {
                        (Some(amount), None) if amount > 0.0 => round2(amount),
                        (Some(_), None) => {
                            return Err(DomainError::invalid("amount must be positive"))
                        }
                        (None, Some(pct)) if pct > 0.0 && pct <= 100.0 => {
                            round2(pct / 100.0 * campaign.budget)
                        }
                        (None, Some(_)) => {
                            return Err(DomainError::invalid(
                                "payout_percentage must be within (0, 100]",
                            ))
                        }
                        _ => {
                            return Err(DomainError::invalid(
                                "exactly one of amount or payout_percentage is required",
                            ))
                        }
                    };
                    let am = pending_milestone(
                        campaign.id,
                        data.influencer_id,
                        data.title,
                        data.description,
                        amount,
                        data.payout_percentage,
                        data.due_date,
                    );
                    Ok(MilestoneRepository::create(am, txn).await?)
                })
            })
            .await?;
        info!(milestone_id = milestone.id, amount = milestone.amount, "Milestone created");
        Ok(milestone)
    }

    /// Instantiates the campaign's milestone template for its assigned influencer.
    #[instrument(name = "create-milestones-from-template", skip_all, fields(user_id = actor.user_id, campaign_id = campaign_id))]
    pub async fn create_from_template(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
    ) -> DomainResult<Vec<MilestoneModel>> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    let influencer_id = campaign.influencer_id.ok_or_else(|| {
                        DomainError::invalid("campaign has no assigned influencer")
                    })?;
                    if campaign.milestones_template.is_empty() {
                        return Err(DomainError::invalid("campaign has no milestone template"));
                    }
                    let mut created = Vec::with_capacity(campaign.milestones_template.0.len());
                    for step in campaign.milestones_template.0 {
                        let amount = round2(step.payout_percentage / 100.0 * campaign.budget);
                        let am = pending_milestone(
                            campaign_id,
                            influencer_id,
                            step.title,
                            None,
                            amount,
                            Some(step.payout_percentage),
                            None,
                        );
                        created.push(MilestoneRepository::create(am, txn).await?);
                    }
                    Ok(created)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// `pending|rejected → in_progress`, by the assigned influencer.
    #[instrument(name = "start-milestone", skip_all, fields(user_id = actor.user_id, milestone_id = id))]
    pub async fn start(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<MilestoneModel> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let milestone = load(id, txn).await?;
                    ensure_assignee(&actor, &milestone)?;
                    transitions::milestone(milestone.status, MilestoneStatus::InProgress)?;
                    let mut am: MilestoneActiveModel = milestone.into();
                    am.status = Set(MilestoneStatus::InProgress);
                    Ok(MilestoneRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// `in_progress → completed` with proof of delivery.
    #[instrument(name = "submit-milestone-proof", skip_all, fields(user_id = actor.user_id, milestone_id = id))]
    pub async fn submit_proof(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        proof: MilestoneProof,
    ) -> DomainResult<MilestoneModel> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let milestone = load(id, txn).await?;
                    ensure_assignee(&actor, &milestone)?;
                    transitions::milestone(milestone.status, MilestoneStatus::Completed)?;
                    let mut am: MilestoneActiveModel = milestone.into();
                    am.status = Set(MilestoneStatus::Completed);
                    am.proof_urls = Set(proof.proof_urls);
                    am.proof_description = Set(proof.proof_description);
                    am.submission_notes = Set(proof.submission_notes);
                    am.completed_at = Set(Some(Utc::now()));
                    Ok(MilestoneRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// `completed → approved|rejected`, by the owning brand.
    #[instrument(name = "review-milestone", skip_all, fields(user_id = actor.user_id, milestone_id = id))]
    pub async fn review(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        review: MilestoneReview,
    ) -> DomainResult<MilestoneModel> {
        if !matches!(
            review.status,
            MilestoneStatus::Approved | MilestoneStatus::Rejected
        ) {
            return Err(DomainError::invalid("decision must be approved or rejected"));
        }
        let actor = *actor;
        let (milestone, influencer_user) = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let milestone = load(id, txn).await?;
                    let campaign = load_campaign(milestone.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, false)?;
                    transitions::milestone(milestone.status, review.status)?;

                    let influencer_user = influencer_user_id(milestone.influencer_id, txn).await?;
                    let mut am: MilestoneActiveModel = milestone.into();
                    am.status = Set(review.status);
                    am.review_notes = Set(review.review_notes);
                    if review.status == MilestoneStatus::Approved {
                        am.approved_by = Set(Some(actor.user_id));
                        am.approved_at = Set(Some(Utc::now()));
                    } else {
                        am.rejection_reason = Set(review.rejection_reason);
                    }
                    let milestone = MilestoneRepository::update(am, txn).await?;
                    Ok((milestone, influencer_user))
                })
            })
            .await?;

        let (kind, title) = if milestone.status == MilestoneStatus::Approved {
            (NotificationType::MilestoneApproved, "Milestone approved")
        } else {
            (NotificationType::MilestoneRejected, "Milestone rejected")
        };
        ctx.dispatch(vec![Notice::new(
            influencer_user,
            kind,
            title,
            format!("Milestone \"{}\" was {}", milestone.title, milestone.status),
        )
        .campaign(milestone.campaign_id)
        .milestone(milestone.id)])
            .await;
        Ok(milestone)
    }

    /// Records whether the payout for an approved milestone went through.
    #[instrument(name = "confirm-milestone-payment", skip_all, fields(user_id = actor.user_id, milestone_id = id))]
    pub async fn confirm_payment(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        confirmation: MilestonePaymentConfirmation,
    ) -> DomainResult<MilestoneModel> {
        let actor = *actor;
        let confirmed = confirmation.confirmed;
        let (milestone, influencer_user) = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let milestone = load(id, txn).await?;
                    let campaign = load_campaign(milestone.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, false)?;
                    if milestone.status != MilestoneStatus::Approved {
                        return Err(DomainError::transition(
                            "milestone payment",
                            milestone.status,
                            "confirmed",
                        ));
                    }

                    let influencer_user = influencer_user_id(milestone.influencer_id, txn).await?;
                    let mut am: MilestoneActiveModel = milestone.into();
                    am.payment_confirmed = Set(PaymentConfirmation::from_flag(confirmed));
                    am.payment_confirmed_at = Set(Some(Utc::now()));
                    am.payment_confirmed_by = Set(Some(actor.user_id));
                    if confirmation.contract_address.is_some() {
                        am.contract_address = Set(confirmation.contract_address);
                    }
                    if confirmation.transaction_hash.is_some() {
                        am.transaction_hash = Set(confirmation.transaction_hash);
                    }
                    let milestone = MilestoneRepository::update(am, txn).await?;
                    Ok((milestone, influencer_user))
                })
            })
            .await?;

        if confirmed {
            ctx.dispatch(vec![Notice::new(
                influencer_user,
                NotificationType::PaymentReceived,
                "Payment received",
                format!("Payment of {:.2} confirmed", milestone.amount),
            )
            .campaign(milestone.campaign_id)
            .milestone(milestone.id)])
                .await;
        }
        Ok(milestone)
    }

    /// Milestones of a campaign: all of them for the owning brand and admins,
    /// only their own for an influencer.
    pub async fn list(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
    ) -> DomainResult<Vec<MilestoneModel>> {
        let campaign = load_campaign(campaign_id, ctx.db()).await?;
        let influencer = match actor.kind {
            ActorKind::Influencer { .. } => Some(actor.require_influencer_profile()?),
            _ => {
                ensure_campaign_owner(actor, &campaign, true)?;
                None
            }
        };
        Ok(MilestoneRepository::find_by_campaign(campaign_id, influencer, ctx.db()).await?)
    }
}

async fn load<C>(id: i32, db: &C) -> DomainResult<MilestoneModel>
where
    C: ConnectionTrait,
{
    MilestoneRepository::find_by_id(id, db)
        .await?
        .ok_or_else(|| DomainError::not_found("milestone"))
}

fn ensure_assignee(actor: &Actor, milestone: &MilestoneModel) -> DomainResult<()> {
    if actor.require_influencer_profile()? == milestone.influencer_id {
        Ok(())
    } else {
        Err(DomainError::forbidden(
            "milestone is assigned to another influencer",
        ))
    }
}

fn pending_milestone(
    campaign_id: i32,
    influencer_id: i32,
    title: String,
    description: Option<String>,
    amount: f64,
    payout_percentage: Option<f64>,
    due_date: Option<DateTime<Utc>>,
) -> MilestoneActiveModel {
    MilestoneActiveModel {
        campaign_id: Set(campaign_id),
        influencer_id: Set(influencer_id),
        title: Set(title),
        description: Set(description),
        amount: Set(amount),
        payout_percentage: Set(payout_percentage),
        status: Set(MilestoneStatus::Pending),
        due_date: Set(due_date),
        proof_urls: Set(StringList::default()),
        payment_confirmed: Set(PaymentConfirmation::Pending),
        ..Default::default()
    }
}
