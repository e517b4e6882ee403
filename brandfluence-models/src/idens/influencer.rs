use super::{timestamp_col, user::User};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_INFLUENCER_ORDER,
    create_table = create_influencer_table,
    create_indexes = create_influencer_indexes,
))]
pub enum Influencer {
    Table,
    Id,
    UserId,
    FullName,
    Bio,
    Niche,
    Location,
    ProfilePictureUrl,
    InstagramHandle,
    YoutubeHandle,
    TiktokHandle,
    TwitterHandle,
    TotalFollowers,
    AverageEngagementRate,
    PortfolioUrl,
    BaseRate,
    ExtraData,
    CreatedAt,
    UpdatedAt,
}

fn create_influencer_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Influencer::Table)
        .if_not_exists()
        .col(pk_auto(Influencer::Id))
        .col(ColumnDef::new(Influencer::UserId).integer().not_null())
        .col(ColumnDef::new(Influencer::FullName).string_len(255).not_null())
        .col(ColumnDef::new(Influencer::Bio).text())
        .col(ColumnDef::new(Influencer::Niche).string_len(128))
        .col(ColumnDef::new(Influencer::Location).string_len(255))
        .col(ColumnDef::new(Influencer::ProfilePictureUrl).string_len(512))
        .col(ColumnDef::new(Influencer::InstagramHandle).string_len(128))
        .col(ColumnDef::new(Influencer::YoutubeHandle).string_len(128))
        .col(ColumnDef::new(Influencer::TiktokHandle).string_len(128))
        .col(ColumnDef::new(Influencer::TwitterHandle).string_len(128))
        .col(
            ColumnDef::new(Influencer::TotalFollowers)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(Influencer::AverageEngagementRate)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(ColumnDef::new(Influencer::PortfolioUrl).string_len(512))
        .col(ColumnDef::new(Influencer::BaseRate).double())
        .col(ColumnDef::new(Influencer::ExtraData).json())
        .col(timestamp_col(Influencer::CreatedAt))
        .col(timestamp_col(Influencer::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_influencer_user")
                .from(Influencer::Table, Influencer::UserId)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_influencer_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("ux_influencer_user_id")
            .table(Influencer::Table)
            .col(Influencer::UserId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_influencer_followers")
            .table(Influencer::Table)
            .col(Influencer::TotalFollowers)
            .to_owned(),
    ])
}
