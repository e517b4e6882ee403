use super::{ensure_campaign_owner, load_campaign};
use crate::{round2, transitions, CoreContext};
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    constants::DEFAULT_CURRENCY,
    domain::prelude::{Actor, ActorKind, NewPayment, PaymentStatusChange},
    entities::prelude::{PaymentActiveModel, PaymentModel},
    enums::status::PaymentStatus,
};
use brandfluence_repository::PaymentRepository;
use chrono::Utc;
use sea_orm::{Set, TransactionTrait};
use tracing::{info, instrument};

pub struct PaymentService;

impl PaymentService {
    #[instrument(name = "create-payment", skip_all, fields(user_id = actor.user_id, campaign_id = data.campaign_id))]
    pub async fn create(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewPayment,
    ) -> DomainResult<PaymentModel> {
        if data.amount <= 0.0 {
            return Err(DomainError::invalid("amount must be positive"));
        }
        let currency = normalize_currency(data.currency.as_deref())?;
        let actor = *actor;
        let payment = ctx
            .db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let campaign = load_campaign(data.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;

                    let am = PaymentActiveModel {
                        campaign_id: Set(campaign.id),
                        amount: Set(round2(data.amount)),
                        currency: Set(currency),
                        status: Set(PaymentStatus::Pending),
                        payment_method: Set(data.payment_method),
                        contract_address: Set(data.contract_address),
                        transaction_hash: Set(data.transaction_hash),
                        ..Default::default()
                    };
                    Ok(PaymentRepository::create(am, txn).await?)
                })
            })
            .await?;
        info!(payment_id = payment.id, "Payment recorded");
        Ok(payment)
    }

    /// Moves a payment along its graph; `released` stamps `paid_at`.
    #[instrument(name = "transition-payment", skip_all, fields(user_id = actor.user_id, payment_id = id))]
    pub async fn transition(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
        change: PaymentStatusChange,
    ) -> DomainResult<PaymentModel> {
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let payment = PaymentRepository::find_by_id(id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("payment"))?;
                    let campaign = load_campaign(payment.campaign_id, txn).await?;
                    ensure_campaign_owner(&actor, &campaign, true)?;
                    transitions::payment(payment.status, change.status)?;

                    let mut am: PaymentActiveModel = payment.into();
                    am.status = Set(change.status);
                    if change.status == PaymentStatus::Released {
                        am.paid_at = Set(Some(Utc::now()));
                    }
                    if change.transaction_hash.is_some() {
                        am.transaction_hash = Set(change.transaction_hash);
                    }
                    Ok(PaymentRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Payments of a campaign: owning brand, assigned influencer or admin.
    pub async fn list(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
    ) -> DomainResult<Vec<PaymentModel>> {
        let campaign = load_campaign(campaign_id, ctx.db()).await?;
        match actor.kind {
            ActorKind::Influencer { influencer_id } => {
                if influencer_id.is_none() || influencer_id != campaign.influencer_id {
                    return Err(DomainError::forbidden(
                        "campaign is not assigned to this influencer",
                    ));
                }
            }
            _ => ensure_campaign_owner(actor, &campaign, true)?,
        }
        Ok(PaymentRepository::find_by_campaign(campaign_id, ctx.db()).await?)
    }
}

fn normalize_currency(currency: Option<&str>) -> DomainResult<String> {
    match currency {
        None => Ok(DEFAULT_CURRENCY.to_string()),
        Some(code) if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) => {
            Ok(code.to_ascii_uppercase())
        }
        Some(_) => Err(DomainError::invalid("currency must be a 3-letter code")),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_currency;

    #[test]
    fn test_currency_defaults_and_normalizes() {
        assert_eq!(normalize_currency(None).unwrap(), "USD");
        assert_eq!(normalize_currency(Some("eur")).unwrap(), "EUR");
        assert!(normalize_currency(Some("EURO")).is_err());
        assert!(normalize_currency(Some("U$D")).is_err());
    }
}
