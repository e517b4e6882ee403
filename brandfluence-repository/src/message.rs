use crate::fetch_page;
use brandfluence_error::StorageResult;
use brandfluence_models::{
    domain::prelude::{PageParams, PageResult},
    entities::prelude::{Message, MessageActiveModel, MessageColumn, MessageModel},
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order,
    QueryFilter, QueryOrder,
};

pub struct MessageRepository;

impl MessageRepository {
    pub async fn create<C>(message: MessageActiveModel, db: &C) -> StorageResult<MessageModel>
    where
        C: ConnectionTrait,
    {
        Ok(message.insert(db).await?)
    }

    pub async fn update<C>(message: MessageActiveModel, db: &C) -> StorageResult<MessageModel>
    where
        C: ConnectionTrait,
    {
        Ok(message.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<MessageModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Message::find_by_id(id).one(db).await?)
    }

    /// Direct messages addressed to the user, newest first.
    pub async fn page_inbox<C>(
        recipient_id: i32,
        params: PageParams,
        db: &C,
    ) -> StorageResult<PageResult<MessageModel>>
    where
        C: ConnectionTrait,
    {
        let query = Message::find()
            .filter(MessageColumn::RecipientId.eq(recipient_id))
            .order_by(MessageColumn::Id, Order::Desc);
        fetch_page(query, params, db).await
    }

    pub async fn page_sent<C>(
        sender_id: i32,
        params: PageParams,
        db: &C,
    ) -> StorageResult<PageResult<MessageModel>>
    where
        C: ConnectionTrait,
    {
        let query = Message::find()
            .filter(MessageColumn::SenderId.eq(sender_id))
            .order_by(MessageColumn::Id, Order::Desc);
        fetch_page(query, params, db).await
    }

    /// Campaign thread in posting order.
    pub async fn page_campaign<C>(
        campaign_id: i32,
        params: PageParams,
        db: &C,
    ) -> StorageResult<PageResult<MessageModel>>
    where
        C: ConnectionTrait,
    {
        let query = Message::find()
            .filter(MessageColumn::CampaignId.eq(campaign_id))
            .order_by(MessageColumn::Id, Order::Asc);
        fetch_page(query, params, db).await
    }

    /// Keeps the messages but drops their link to a deleted campaign.
    pub async fn detach_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Message::update_many()
            .col_expr(MessageColumn::CampaignId, Expr::value(Option::<i32>::None))
            .filter(MessageColumn::CampaignId.eq(campaign_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
