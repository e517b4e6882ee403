use brandfluence_error::StorageResult;
use brandfluence_models::entities::prelude::{
    Milestone, MilestoneActiveModel, MilestoneColumn, MilestoneModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QueryTrait,
};

pub struct MilestoneRepository;

impl MilestoneRepository {
    pub async fn create<C>(milestone: MilestoneActiveModel, db: &C) -> StorageResult<MilestoneModel>
    where
        C: ConnectionTrait,
    {
        Ok(milestone.insert(db).await?)
    }

    pub async fn update<C>(milestone: MilestoneActiveModel, db: &C) -> StorageResult<MilestoneModel>
    where
        C: ConnectionTrait,
    {
        Ok(milestone.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<MilestoneModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Milestone::find_by_id(id).one(db).await?)
    }

    /// Milestones of a campaign, optionally narrowed to one influencer.
    pub async fn find_by_campaign<C>(
        campaign_id: i32,
        influencer_id: Option<i32>,
        db: &C,
    ) -> StorageResult<Vec<MilestoneModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Milestone::find()
            .filter(MilestoneColumn::CampaignId.eq(campaign_id))
            .apply_if(influencer_id, |q, id| {
                q.filter(MilestoneColumn::InfluencerId.eq(id))
            })
            .order_by(MilestoneColumn::Id, Order::Asc)
            .all(db)
            .await?)
    }

    pub async fn delete_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Milestone::delete_many()
            .filter(MilestoneColumn::CampaignId.eq(campaign_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
