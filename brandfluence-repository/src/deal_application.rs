use brandfluence_error::StorageResult;
use brandfluence_models::entities::prelude::{
    DealApplication, DealApplicationActiveModel, DealApplicationColumn, DealApplicationModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
};

pub struct DealApplicationRepository;

impl DealApplicationRepository {
    pub async fn create<C>(
        application: DealApplicationActiveModel,
        db: &C,
    ) -> StorageResult<DealApplicationModel>
    where
        C: ConnectionTrait,
    {
        Ok(application.insert(db).await?)
    }

    pub async fn update<C>(
        application: DealApplicationActiveModel,
        db: &C,
    ) -> StorageResult<DealApplicationModel>
    where
        C: ConnectionTrait,
    {
        Ok(application.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<DealApplicationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(DealApplication::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_campaign_and_influencer<C>(
        campaign_id: i32,
        influencer_id: i32,
        db: &C,
    ) -> StorageResult<Option<DealApplicationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(DealApplication::find()
            .filter(DealApplicationColumn::CampaignId.eq(campaign_id))
            .filter(DealApplicationColumn::InfluencerId.eq(influencer_id))
            .one(db)
            .await?)
    }

    pub async fn find_by_campaign<C>(
        campaign_id: i32,
        db: &C,
    ) -> StorageResult<Vec<DealApplicationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(DealApplication::find()
            .filter(DealApplicationColumn::CampaignId.eq(campaign_id))
            .order_by(DealApplicationColumn::Id, Order::Asc)
            .all(db)
            .await?)
    }

    pub async fn find_by_influencer<C>(
        influencer_id: i32,
        db: &C,
    ) -> StorageResult<Vec<DealApplicationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(DealApplication::find()
            .filter(DealApplicationColumn::InfluencerId.eq(influencer_id))
            .order_by(DealApplicationColumn::Id, Order::Asc)
            .all(db)
            .await?)
    }

    pub async fn delete_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(DealApplication::delete_many()
            .filter(DealApplicationColumn::CampaignId.eq(campaign_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
