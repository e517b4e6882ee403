use crate::{fetch_page, icontains};
use brandfluence_error::StorageResult;
use brandfluence_models::{
    domain::prelude::{BrandListParams, PageResult},
    entities::prelude::{Brand, BrandActiveModel, BrandColumn, BrandModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QueryTrait,
};

pub struct BrandRepository;

impl BrandRepository {
    pub async fn create<C>(brand: BrandActiveModel, db: &C) -> StorageResult<BrandModel>
    where
        C: ConnectionTrait,
    {
        Ok(brand.insert(db).await?)
    }

    pub async fn update<C>(brand: BrandActiveModel, db: &C) -> StorageResult<BrandModel>
    where
        C: ConnectionTrait,
    {
        Ok(brand.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_user_id<C>(user_id: i32, db: &C) -> StorageResult<Option<BrandModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Brand::find()
            .filter(BrandColumn::UserId.eq(user_id))
            .one(db)
            .await?)
    }

    pub async fn page<C>(params: &BrandListParams, db: &C) -> StorageResult<PageResult<BrandModel>>
    where
        C: ConnectionTrait,
    {
        let query = Brand::find()
            .apply_if(params.industry.as_deref(), |q, industry| {
                q.filter(icontains(BrandColumn::Industry, industry))
            })
            .apply_if(params.location.as_deref(), |q, location| {
                q.filter(icontains(BrandColumn::Location, location))
            })
            .order_by(BrandColumn::Id, Order::Asc);
        fetch_page(query, params.page, db).await
    }
}
