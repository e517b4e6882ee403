use super::{
    brand::Brand, enum_col, influencer::Influencer, json_list_col, nullable_timestamp_col,
    timestamp_col,
};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_CAMPAIGN_ORDER,
    create_table = create_campaign_table,
    create_indexes = create_campaign_indexes,
))]
pub enum Campaign {
    Table,
    Id,
    BrandId,
    InfluencerId,
    Title,
    Description,
    Brief,
    Status,
    Budget,
    BudgetNegotiable,
    Deadline,
    RequiredFollowerCount,
    Platforms,
    Deliverables,
    MilestonesTemplate,
    StartDate,
    EndDate,
    TargetAudience,
    ContentGuidelines,
    Impressions,
    Clicks,
    Conversions,
    EngagementRate,
    ViewCount,
    ApplicationCount,
    CreatedAt,
    UpdatedAt,
}

fn counter_col(col: Campaign) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .default(0)
        .to_owned()
}

fn create_campaign_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Campaign::Table)
        .if_not_exists()
        .col(pk_auto(Campaign::Id))
        .col(ColumnDef::new(Campaign::BrandId).integer().not_null())
        .col(ColumnDef::new(Campaign::InfluencerId).integer().null())
        .col(ColumnDef::new(Campaign::Title).string_len(255).not_null())
        .col(ColumnDef::new(Campaign::Description).text())
        .col(ColumnDef::new(Campaign::Brief).text())
        .col(enum_col(Campaign::Status, "draft"))
        .col(ColumnDef::new(Campaign::Budget).double().not_null())
        .col(enum_col(Campaign::BudgetNegotiable, "fixed"))
        .col(
            ColumnDef::new(Campaign::Deadline)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(counter_col(Campaign::RequiredFollowerCount))
        .col(json_list_col(Campaign::Platforms))
        .col(json_list_col(Campaign::Deliverables))
        .col(json_list_col(Campaign::MilestonesTemplate))
        .col(nullable_timestamp_col(Campaign::StartDate))
        .col(nullable_timestamp_col(Campaign::EndDate))
        .col(ColumnDef::new(Campaign::TargetAudience).json())
        .col(ColumnDef::new(Campaign::ContentGuidelines).text())
        .col(counter_col(Campaign::Impressions))
        .col(counter_col(Campaign::Clicks))
        .col(counter_col(Campaign::Conversions))
        .col(
            ColumnDef::new(Campaign::EngagementRate)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(counter_col(Campaign::ViewCount))
        .col(counter_col(Campaign::ApplicationCount))
        .col(timestamp_col(Campaign::CreatedAt))
        .col(timestamp_col(Campaign::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_campaign_brand")
                .from(Campaign::Table, Campaign::BrandId)
                .to(Brand::Table, Brand::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_campaign_influencer")
                .from(Campaign::Table, Campaign::InfluencerId)
                .to(Influencer::Table, Influencer::Id),
        )
        .to_owned()
}

fn create_campaign_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_campaign_brand_id")
            .table(Campaign::Table)
            .col(Campaign::BrandId)
            .to_owned(),
        Index::create()
            .name("idx_campaign_influencer_id")
            .table(Campaign::Table)
            .col(Campaign::InfluencerId)
            .to_owned(),
        Index::create()
            .name("idx_campaign_status")
            .table(Campaign::Table)
            .col(Campaign::Status)
            .to_owned(),
    ])
}
