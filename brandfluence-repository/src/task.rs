use crate::expect_one;
use brandfluence_error::StorageResult;
use brandfluence_models::{
    entities::prelude::{Campaign, CampaignColumn, Task, TaskActiveModel, TaskColumn, TaskModel},
    enums::status::TaskStatus,
};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QueryTrait,
};

/// Board filter; `None` fields are unconstrained.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskFilter {
    pub campaign_id: Option<i32>,
    pub status: Option<TaskStatus>,
    pub influencer_id: Option<i32>,
    /// Restrict to tasks on campaigns owned by this brand
    pub brand_id: Option<i32>,
}

pub struct TaskRepository;

impl TaskRepository {
    pub async fn create<C>(task: TaskActiveModel, db: &C) -> StorageResult<TaskModel>
    where
        C: ConnectionTrait,
    {
        Ok(task.insert(db).await?)
    }

    pub async fn update<C>(task: TaskActiveModel, db: &C) -> StorageResult<TaskModel>
    where
        C: ConnectionTrait,
    {
        Ok(task.update(db).await?)
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let res = Task::delete_by_id(id).exec(db).await?;
        expect_one(res.rows_affected, "task")
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<TaskModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Task::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_filter<C>(filter: TaskFilter, db: &C) -> StorageResult<Vec<TaskModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Task::find()
            .apply_if(filter.campaign_id, |q, id| {
                q.filter(TaskColumn::CampaignId.eq(id))
            })
            .apply_if(filter.status, |q, status| {
                q.filter(TaskColumn::Status.eq(status))
            })
            .apply_if(filter.influencer_id, |q, id| {
                q.filter(TaskColumn::InfluencerId.eq(id))
            })
            .apply_if(filter.brand_id, |q, brand_id| {
                q.filter(
                    TaskColumn::CampaignId.in_subquery(
                        Query::select()
                            .column(CampaignColumn::Id)
                            .from(Campaign)
                            .and_where(Expr::col(CampaignColumn::BrandId).eq(brand_id))
                            .to_owned(),
                    ),
                )
            })
            .order_by(TaskColumn::Status, Order::Asc)
            .order_by(TaskColumn::Position, Order::Asc)
            .order_by(TaskColumn::Id, Order::Asc)
            .all(db)
            .await?)
    }

    pub async fn delete_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Task::delete_many()
            .filter(TaskColumn::CampaignId.eq(campaign_id))
            .exec(db)
            .await?
            .rows_affected)
    }
}
