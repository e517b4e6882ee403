use super::{
    campaign::Campaign, enum_col, influencer::Influencer, nullable_timestamp_col, timestamp_col,
    user::User,
};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_TASK_ORDER,
    create_table = create_task_table,
    create_indexes = create_task_indexes,
))]
pub enum Task {
    Table,
    Id,
    CampaignId,
    InfluencerId,
    Title,
    Description,
    Status,
    Priority,
    DueDate,
    DeliverableType,
    Requirements,
    Position,
    SubmittedAt,
    ReviewedAt,
    ReviewerId,
    ReviewNotes,
    CreatedAt,
    UpdatedAt,
}

fn create_task_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Task::Table)
        .if_not_exists()
        .col(pk_auto(Task::Id))
        .col(ColumnDef::new(Task::CampaignId).integer().not_null())
        .col(ColumnDef::new(Task::InfluencerId).integer().not_null())
        .col(ColumnDef::new(Task::Title).string_len(255).not_null())
        .col(ColumnDef::new(Task::Description).text())
        .col(enum_col(Task::Status, "todo"))
        .col(enum_col(Task::Priority, "medium"))
        .col(nullable_timestamp_col(Task::DueDate))
        .col(ColumnDef::new(Task::DeliverableType).string_len(64))
        .col(ColumnDef::new(Task::Requirements).json())
        .col(
            ColumnDef::new(Task::Position)
                .integer()
                .not_null()
                .default(0),
        )
        .col(nullable_timestamp_col(Task::SubmittedAt))
        .col(nullable_timestamp_col(Task::ReviewedAt))
        .col(ColumnDef::new(Task::ReviewerId).integer().null())
        .col(ColumnDef::new(Task::ReviewNotes).text())
        .col(timestamp_col(Task::CreatedAt))
        .col(timestamp_col(Task::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_task_campaign")
                .from(Task::Table, Task::CampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task_influencer")
                .from(Task::Table, Task::InfluencerId)
                .to(Influencer::Table, Influencer::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_task_reviewer")
                .from(Task::Table, Task::ReviewerId)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_task_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_task_campaign_id")
            .table(Task::Table)
            .col(Task::CampaignId)
            .to_owned(),
        Index::create()
            .name("idx_task_influencer_id")
            .table(Task::Table)
            .col(Task::InfluencerId)
            .to_owned(),
        Index::create()
            .name("idx_task_board")
            .table(Task::Table)
            .col(Task::Status)
            .col(Task::Position)
            .to_owned(),
    ])
}
