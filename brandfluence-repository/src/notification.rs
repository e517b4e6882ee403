use crate::fetch_page;
use brandfluence_error::StorageResult;
use brandfluence_models::{
    domain::prelude::{PageParams, PageResult},
    entities::prelude::{
        DealApplication, DealApplicationColumn, Milestone, MilestoneColumn, Notification,
        NotificationActiveModel, NotificationColumn, NotificationModel,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order, QueryFilter, QueryOrder,
    QueryTrait,
};

pub struct NotificationRepository;

impl NotificationRepository {
    pub async fn create<C>(
        notification: NotificationActiveModel,
        db: &C,
    ) -> StorageResult<NotificationModel>
    where
        C: ConnectionTrait,
    {
        Ok(notification.insert(db).await?)
    }

    pub async fn update<C>(
        notification: NotificationActiveModel,
        db: &C,
    ) -> StorageResult<NotificationModel>
    where
        C: ConnectionTrait,
    {
        Ok(notification.update(db).await?)
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<NotificationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Notification::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(
        user_id: i32,
        unread_only: bool,
        params: PageParams,
        db: &C,
    ) -> StorageResult<PageResult<NotificationModel>>
    where
        C: ConnectionTrait,
    {
        let query = Notification::find()
            .filter(NotificationColumn::UserId.eq(user_id))
            .apply_if(unread_only.then_some(false), |q, read| {
                q.filter(NotificationColumn::IsRead.eq(read))
            })
            .order_by(NotificationColumn::Id, Order::Desc);
        fetch_page(query, params, db).await
    }

    pub async fn mark_all_read<C>(user_id: i32, at: DateTime<Utc>, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(Notification::update_many()
            .col_expr(NotificationColumn::IsRead, Expr::value(true))
            .col_expr(NotificationColumn::ReadAt, Expr::value(at))
            .filter(NotificationColumn::UserId.eq(user_id))
            .filter(NotificationColumn::IsRead.eq(false))
            .exec(db)
            .await?
            .rows_affected)
    }

    /// Nulls every reference to the campaign and to its applications and
    /// milestones, so those rows can be deleted.
    pub async fn detach_campaign<C>(campaign_id: i32, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let by_campaign = Notification::update_many()
            .col_expr(
                NotificationColumn::RelatedCampaignId,
                Expr::value(Option::<i32>::None),
            )
            .filter(NotificationColumn::RelatedCampaignId.eq(campaign_id))
            .exec(db)
            .await?;
        let by_application = Notification::update_many()
            .col_expr(
                NotificationColumn::RelatedApplicationId,
                Expr::value(Option::<i32>::None),
            )
            .filter(
                NotificationColumn::RelatedApplicationId.in_subquery(
                    Query::select()
                        .column(DealApplicationColumn::Id)
                        .from(DealApplication)
                        .and_where(Expr::col(DealApplicationColumn::CampaignId).eq(campaign_id))
                        .to_owned(),
                ),
            )
            .exec(db)
            .await?;
        let by_milestone = Notification::update_many()
            .col_expr(
                NotificationColumn::RelatedMilestoneId,
                Expr::value(Option::<i32>::None),
            )
            .filter(
                NotificationColumn::RelatedMilestoneId.in_subquery(
                    Query::select()
                        .column(MilestoneColumn::Id)
                        .from(Milestone)
                        .and_where(Expr::col(MilestoneColumn::CampaignId).eq(campaign_id))
                        .to_owned(),
                ),
            )
            .exec(db)
            .await?;
        Ok(by_campaign.rows_affected + by_application.rows_affected + by_milestone.rows_affected)
    }
}
