use super::{enum_col, timestamp_col};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_USER_ORDER,
    create_table = create_user_table,
    create_indexes = create_user_indexes,
))]
pub enum User {
    Table,
    Id,
    Email,
    Username,
    HashedPassword,
    Role,
    IsActive,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}

fn create_user_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .if_not_exists()
        .col(pk_auto(User::Id))
        .col(ColumnDef::new(User::Email).string_len(255).not_null())
        .col(ColumnDef::new(User::Username).string_len(128).not_null())
        .col(ColumnDef::new(User::HashedPassword).string_len(255).not_null())
        .col(enum_col(User::Role, "influencer"))
        .col(
            ColumnDef::new(User::IsActive)
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(User::IsVerified)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(timestamp_col(User::CreatedAt))
        .col(timestamp_col(User::UpdatedAt))
        .to_owned()
}

fn create_user_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("ux_user_email")
            .table(User::Table)
            .col(User::Email)
            .unique()
            .to_owned(),
        Index::create()
            .name("ux_user_username")
            .table(User::Table)
            .col(User::Username)
            .unique()
            .to_owned(),
    ])
}
