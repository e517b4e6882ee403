use crate::{fetch_page, icontains};
use brandfluence_error::StorageResult;
use brandfluence_models::{
    domain::prelude::{InfluencerListParams, PageResult},
    entities::prelude::{Influencer, InfluencerActiveModel, InfluencerColumn, InfluencerModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

pub struct InfluencerRepository;

impl InfluencerRepository {
    pub async fn create<C>(
        influencer: InfluencerActiveModel,
        db: &C,
    ) -> StorageResult<InfluencerModel>
    where
        C: ConnectionTrait,
    {
        Ok(influencer.insert(db).await?)
    }

    pub async fn update<C>(
        influencer: InfluencerActiveModel,
        db: &C,
    ) -> StorageResult<InfluencerModel>
    where
        C: ConnectionTrait,
    {
        Ok(influencer.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<InfluencerModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Influencer::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_user_id<C>(
        user_id: i32,
        db: &C,
    ) -> StorageResult<Option<InfluencerModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Influencer::find()
            .filter(InfluencerColumn::UserId.eq(user_id))
            .one(db)
            .await?)
    }

    pub async fn exists_by_id<C>(id: i32, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        Ok(Influencer::find_by_id(id).count(db).await? > 0)
    }

    pub async fn page<C>(
        params: &InfluencerListParams,
        db: &C,
    ) -> StorageResult<PageResult<InfluencerModel>>
    where
        C: ConnectionTrait,
    {
        let query = Influencer::find()
            .apply_if(params.niche.as_deref(), |q, niche| {
                q.filter(icontains(InfluencerColumn::Niche, niche))
            })
            .apply_if(params.location.as_deref(), |q, location| {
                q.filter(icontains(InfluencerColumn::Location, location))
            })
            .apply_if(params.min_followers, |q, min| {
                q.filter(InfluencerColumn::TotalFollowers.gte(min))
            })
            .order_by(InfluencerColumn::Id, Order::Asc);
        fetch_page(query, params.page, db).await
    }
}
