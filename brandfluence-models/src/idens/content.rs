use super::{enum_col, json_list_col, nullable_timestamp_col, task::Task, timestamp_col, user::User};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_CONTENT_ORDER,
    create_table = create_content_table,
    create_indexes = create_content_indexes,
))]
pub enum Content {
    Table,
    Id,
    TaskId,
    Title,
    Description,
    ContentType,
    Status,
    FileUrl,
    ThumbnailUrl,
    AdditionalFiles,
    Platform,
    PostUrl,
    ReviewNotes,
    ReviewedAt,
    ReviewerId,
    CreatedAt,
    UpdatedAt,
}

fn create_content_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Content::Table)
        .if_not_exists()
        .col(pk_auto(Content::Id))
        .col(ColumnDef::new(Content::TaskId).integer().not_null())
        .col(ColumnDef::new(Content::Title).string_len(255).not_null())
        .col(ColumnDef::new(Content::Description).text())
        .col(enum_col(Content::ContentType, "other"))
        .col(enum_col(Content::Status, "draft"))
        .col(ColumnDef::new(Content::FileUrl).string_len(1024))
        .col(ColumnDef::new(Content::ThumbnailUrl).string_len(1024))
        .col(json_list_col(Content::AdditionalFiles))
        .col(ColumnDef::new(Content::Platform).string_len(64))
        .col(ColumnDef::new(Content::PostUrl).string_len(1024))
        .col(ColumnDef::new(Content::ReviewNotes).text())
        .col(nullable_timestamp_col(Content::ReviewedAt))
        .col(ColumnDef::new(Content::ReviewerId).integer().null())
        .col(timestamp_col(Content::CreatedAt))
        .col(timestamp_col(Content::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_content_task")
                .from(Content::Table, Content::TaskId)
                .to(Task::Table, Task::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_content_reviewer")
                .from(Content::Table, Content::ReviewerId)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_content_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("ux_content_task_id")
        .table(Content::Table)
        .col(Content::TaskId)
        .unique()
        .to_owned()])
}
