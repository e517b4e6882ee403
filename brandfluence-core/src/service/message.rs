use super::{is_campaign_party, load_campaign};
use crate::CoreContext;
use brandfluence_error::{domain::DomainError, DomainResult};
use brandfluence_models::{
    domain::prelude::{Actor, MessageListParams, NewMessage, PageResult},
    entities::prelude::{MessageActiveModel, MessageModel},
};
use brandfluence_repository::{MessageRepository, UserRepository};
use sea_orm::{Set, TransactionTrait};
use tracing::instrument;

pub struct MessageService;

impl MessageService {
    /// Sends a direct message, a campaign thread post, or both.
    ///
    /// Without a recipient the message is a group message on the campaign.
    #[instrument(name = "send-message", skip_all, fields(user_id = actor.user_id))]
    pub async fn send(
        ctx: &CoreContext,
        actor: &Actor,
        data: NewMessage,
    ) -> DomainResult<MessageModel> {
        if data.recipient_id.is_none() && data.campaign_id.is_none() {
            return Err(DomainError::invalid("recipient_id or campaign_id is required"));
        }
        if data.content.trim().is_empty() {
            return Err(DomainError::invalid("content is required"));
        }
        let actor = *actor;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    if let Some(recipient_id) = data.recipient_id {
                        if !UserRepository::exists_by_id(recipient_id, txn).await? {
                            return Err(DomainError::not_found("recipient"));
                        }
                    }
                    if let Some(campaign_id) = data.campaign_id {
                        let campaign = load_campaign(campaign_id, txn).await?;
                        if !is_campaign_party(&actor, &campaign) {
                            return Err(DomainError::forbidden("not a party to this campaign"));
                        }
                    }
                    let am = MessageActiveModel {
                        sender_id: Set(actor.user_id),
                        recipient_id: Set(data.recipient_id),
                        campaign_id: Set(data.campaign_id),
                        subject: Set(data.subject),
                        content: Set(data.content),
                        is_read: Set(false),
                        is_group_message: Set(data.recipient_id.is_none()),
                        attachments: Set(data.attachments),
                        ..Default::default()
                    };
                    Ok(MessageRepository::create(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }

    pub async fn inbox(
        ctx: &CoreContext,
        actor: &Actor,
        params: &MessageListParams,
    ) -> DomainResult<PageResult<MessageModel>> {
        Ok(MessageRepository::page_inbox(actor.user_id, params.page, ctx.db()).await?)
    }

    pub async fn sent(
        ctx: &CoreContext,
        actor: &Actor,
        params: &MessageListParams,
    ) -> DomainResult<PageResult<MessageModel>> {
        Ok(MessageRepository::page_sent(actor.user_id, params.page, ctx.db()).await?)
    }

    /// Campaign thread; parties only.
    pub async fn campaign_thread(
        ctx: &CoreContext,
        actor: &Actor,
        campaign_id: i32,
        params: &MessageListParams,
    ) -> DomainResult<PageResult<MessageModel>> {
        let campaign = load_campaign(campaign_id, ctx.db()).await?;
        if !is_campaign_party(actor, &campaign) {
            return Err(DomainError::forbidden("not a party to this campaign"));
        }
        Ok(MessageRepository::page_campaign(campaign_id, params.page, ctx.db()).await?)
    }

    /// Recipient only.
    pub async fn mark_read(ctx: &CoreContext, actor: &Actor, id: i32) -> DomainResult<MessageModel> {
        let user_id = actor.user_id;
        ctx.db()
            .transaction::<_, _, DomainError>(|txn| {
                Box::pin(async move {
                    let message = MessageRepository::find_by_id(id, txn)
                        .await?
                        .ok_or_else(|| DomainError::not_found("message"))?;
                    if message.recipient_id != Some(user_id) {
                        return Err(DomainError::forbidden(
                            "only the recipient may mark a message read",
                        ));
                    }
                    if message.is_read {
                        return Ok(message);
                    }
                    let mut am: MessageActiveModel = message.into();
                    am.is_read = Set(true);
                    Ok(MessageRepository::update(am, txn).await?)
                })
            })
            .await
            .map_err(DomainError::from)
    }
}
