use crate::expect_one;
use brandfluence_error::StorageResult;
use brandfluence_models::entities::prelude::{
    Content, ContentActiveModel, ContentColumn, ContentModel, Task, TaskColumn,
};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

pub struct ContentRepository;

impl ContentRepository {
    pub async fn create<C>(content: ContentActiveModel, db: &C) -> StorageResult<ContentModel>
    where
        C: ConnectionTrait,
    {
        Ok(content.insert(db).await?)
    }

    pub async fn update<C>(content: ContentActiveModel, db: &C) -> StorageResult<ContentModel>
    where
        C: ConnectionTrait,
    {
        Ok(content.update(db).await?)
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let res = Content::delete_by_id(id).exec(db).await?;
        expect_one(res.rows_affected, "content")
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ContentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Content::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_task_id<C>(task_id: i32, db: &C) -> StorageResult<Option<ContentModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Content::find()
            .filter(ContentColumn::TaskId.eq(task_id))
            .one(db)
            .await?)
    }

    pub async fn delete_by_task<C>(task_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Content::delete_many()
            .filter(ContentColumn::TaskId.eq(task_id))
            .exec(db)
            .await?
            .rows_affected)
    }

    /// Removes the content of every task on the campaign.
    pub async fn delete_by_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Content::delete_many()
            .filter(
                ContentColumn::TaskId.in_subquery(
                    Query::select()
                        .column(TaskColumn::Id)
                        .from(Task)
                        .and_where(Expr::col(TaskColumn::CampaignId).eq(campaign_id))
                        .to_owned(),
                ),
            )
            .exec(db)
            .await?
            .rows_affected)
    }
}
