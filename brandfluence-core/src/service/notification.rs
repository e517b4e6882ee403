use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, NotificationListParams, PageResult},
    entities::prelude::{NotificationActiveModel, NotificationModel},
};
use brandfluence_repository::NotificationRepository;
use chrono::Utc;
use sea_orm::{Set, TransactionTrait};

pub struct NotificationService;

impl NotificationService {
    pub async fn list(
        ctx: &CoreContext,
        actor: &Actor,
        params: &NotificationListParams,
    ) -> DomainResult<PageResult<NotificationModel>> {
        Ok(NotificationRepository::page(
            actor.user_id,
            params.unread_only,
            params.page,
            ctx.db(),
        )
        .await?)
    }

    /// Marks one of the caller's notifications as read; idempotent.
    pub async fn mark_read(
        ctx: &CoreContext,
        actor: &Actor,
        id: i32,
    ) -> DomainResult<NotificationModel> {
        let user_id = actor.user_id;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let notification = NotificationRepository::find_by_id(id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("notification"))?;
                    if notification.user_id != user_id {
                        return Err(DomainError::forbidden(
                            "notification belongs to another user",
                        ));
                    }
                    if notification.is_read {
                        return Ok(notification);
                    }
                    let mut am: NotificationActiveModel = notification.into();
                    am.is_read = Set(true);
                    am.read_at = Set(Some(Utc::now()));
                    Ok(NotificationRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    /// Returns how many notifications changed.
    pub async fn mark_all_read(ctx: &CoreContext, actor: &Actor) -> DomainResult<u64> {
        Ok(NotificationRepository::mark_all_read(actor.user_id, Utc::now(), ctx.db()).await?)
    }
}
