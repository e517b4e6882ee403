use crate::{expect_one, fetch_page};
use brandfluence_error::StorageResult;
use brandfluence_models::{
    domain::prelude::{PageParams, PageResult},
    entities::prelude::{Campaign, CampaignActiveModel, CampaignColumn, CampaignModel},
    enums::status::CampaignStatus,
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order,
    QueryFilter, QueryOrder, QueryTrait,
};

/// Visibility window applied to campaign listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignScope {
    All,
    Brand(i32),
    /// Campaigns whose assigned influencer is this profile
    Influencer(i32),
}

pub struct CampaignRepository;

impl CampaignRepository {
    pub async fn create<C>(campaign: CampaignActiveModel, db: &C) -> StorageResult<CampaignModel>
    where
        C: ConnectionTrait,
    {
        Ok(campaign.insert(db).await?)
    }

    pub async fn update<C>(campaign: CampaignActiveModel, db: &C) -> StorageResult<CampaignModel>
    where
        C: ConnectionTrait,
    {
        Ok(campaign.update(db).await?)
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let res = Campaign::delete_by_id(id).exec(db).await?;
        expect_one(res.rows_affected, "campaign")
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<CampaignModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Campaign::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(
        scope: CampaignScope,
        status: Option<CampaignStatus>,
        params: PageParams,
        db: &C,
    ) -> StorageResult<PageResult<CampaignModel>>
    where
        C: ConnectionTrait,
    {
        let query = Campaign::find()
            .apply_if(
                match scope {
                    CampaignScope::Brand(brand_id) => Some(CampaignColumn::BrandId.eq(brand_id)),
                    CampaignScope::Influencer(influencer_id) => {
                        Some(CampaignColumn::InfluencerId.eq(influencer_id))
                    }
                    CampaignScope::All => None,
                },
                |q, cond| q.filter(cond),
            )
            .apply_if(status, |q, status| q.filter(CampaignColumn::Status.eq(status)))
            .order_by(CampaignColumn::Id, Order::Asc);
        fetch_page(query, params, db).await
    }

    /// Atomic `view_count + 1`, not a read-modify-write.
    pub async fn increment_view_count<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        Self::increment(id, CampaignColumn::ViewCount, db).await
    }

    pub async fn increment_application_count<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        Self::increment(id, CampaignColumn::ApplicationCount, db).await
    }

    async fn increment<C>(id: i32, col: CampaignColumn, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let res = Campaign::update_many()
            .col_expr(col, Expr::col(col).add(1))
            .filter(CampaignColumn::Id.eq(id))
            .exec(db)
            .await?;
        expect_one(res.rows_affected, "campaign")
    }

    pub async fn assign_influencer<C>(id: i32, influencer_id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let res = Campaign::update_many()
            .col_expr(CampaignColumn::InfluencerId, Expr::value(influencer_id))
            .filter(CampaignColumn::Id.eq(id))
            .exec(db)
            .await?;
        expect_one(res.rows_affected, "campaign")
    }
}
