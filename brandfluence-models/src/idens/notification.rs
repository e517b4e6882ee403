use super::{
    campaign::Campaign, deal_application::DealApplication, enum_col, milestone::Milestone,
    nullable_timestamp_col, timestamp_col, user::User,
};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_NOTIFICATION_ORDER,
    create_table = create_notification_table,
    create_indexes = create_notification_indexes,
))]
pub enum Notification {
    Table,
    Id,
    UserId,
    NotificationType,
    Title,
    Message,
    RelatedCampaignId,
    RelatedApplicationId,
    RelatedMilestoneId,
    ActionUrl,
    IsRead,
    ReadAt,
    CreatedAt,
}

fn create_notification_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Notification::Table)
        .if_not_exists()
        .col(pk_auto(Notification::Id))
        .col(ColumnDef::new(Notification::UserId).integer().not_null())
        .col(enum_col(Notification::NotificationType, "deal_posted"))
        .col(ColumnDef::new(Notification::Title).string_len(255).not_null())
        .col(ColumnDef::new(Notification::Message).text().not_null())
        .col(ColumnDef::new(Notification::RelatedCampaignId).integer().null())
        .col(ColumnDef::new(Notification::RelatedApplicationId).integer().null())
        .col(ColumnDef::new(Notification::RelatedMilestoneId).integer().null())
        .col(ColumnDef::new(Notification::ActionUrl).string_len(512))
        .col(
            ColumnDef::new(Notification::IsRead)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(nullable_timestamp_col(Notification::ReadAt))
        .col(timestamp_col(Notification::CreatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification_user")
                .from(Notification::Table, Notification::UserId)
                .to(User::Table, User::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification_campaign")
                .from(Notification::Table, Notification::RelatedCampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification_application")
                .from(Notification::Table, Notification::RelatedApplicationId)
                .to(DealApplication::Table, DealApplication::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_notification_milestone")
                .from(Notification::Table, Notification::RelatedMilestoneId)
                .to(Milestone::Table, Milestone::Id),
        )
        .to_owned()
}

fn create_notification_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_notification_user_unread")
        .table(Notification::Table)
        .col(Notification::UserId)
        .col(Notification::IsRead)
        .to_owned()])
}
