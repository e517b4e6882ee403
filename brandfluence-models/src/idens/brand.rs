use super::{timestamp_col, user::User};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_BRAND_ORDER,
    create_table = create_brand_table,
    create_indexes = create_brand_indexes,
))]
pub enum Brand {
    Table,
    Id,
    UserId,
    CompanyName,
    Industry,
    Description,
    Website,
    LogoUrl,
    Location,
    ContactEmail,
    ContactPhone,
    ExtraData,
    CreatedAt,
    UpdatedAt,
}

fn create_brand_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Brand::Table)
        .if_not_exists()
        .col(pk_auto(Brand::Id))
        .col(ColumnDef::new(Brand::UserId).integer().not_null())
        .col(ColumnDef::new(Brand::CompanyName).string_len(255).not_null())
        .col(ColumnDef::new(Brand::Industry).string_len(128))
        .col(ColumnDef::new(Brand::Description).text())
        .col(ColumnDef::new(Brand::Website).string_len(512))
        .col(ColumnDef::new(Brand::LogoUrl).string_len(512))
        .col(ColumnDef::new(Brand::Location).string_len(255))
        .col(ColumnDef::new(Brand::ContactEmail).string_len(255))
        .col(ColumnDef::new(Brand::ContactPhone).string_len(64))
        .col(ColumnDef::new(Brand::ExtraData).json())
        .col(timestamp_col(Brand::CreatedAt))
        .col(timestamp_col(Brand::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_brand_user")
                .from(Brand::Table, Brand::UserId)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_brand_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("ux_brand_user_id")
        .table(Brand::Table)
        .col(Brand::UserId)
        .unique()
        .to_owned()])
}
