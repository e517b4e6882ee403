use brandfluence_error::StorageResult;
use brandfluence_models::entities::prelude::{
    Payment, PaymentActiveModel, PaymentColumn, PaymentModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};

pub struct PaymentRepository;

impl PaymentRepository {
    pub async fn create<C>(payment: PaymentActiveModel, db: &C) -> StorageResult<PaymentModel>
    where
        C: ConnectionTrait,
    {
        Ok(payment.insert(db).await?)
    }

    pub async fn update<C>(payment: PaymentActiveModel, db: &C) -> StorageResult<PaymentModel>
    where
        C: ConnectionTrait,
    {
        Ok(payment.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<PaymentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Payment::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<Vec<PaymentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Payment::find()
            .filter(PaymentColumn::CampaignId.eq(campaign_id))
            .order_by(PaymentColumn::Id, Order::Asc)
            .all(db)
            .await?)
    }

    pub async fn delete_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Payment::delete_many()
            .filter(PaymentColumn::CampaignId.eq(campaign_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
