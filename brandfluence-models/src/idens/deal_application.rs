use super::{
    campaign::Campaign, enum_col, influencer::Influencer, json_list_col, nullable_timestamp_col,
    timestamp_col, user::User,
};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_DEAL_APPLICATION_ORDER,
    create_table = create_deal_application_table,
    create_indexes = create_deal_application_indexes,
))]
pub enum DealApplication {
    Table,
    Id,
    CampaignId,
    InfluencerId,
    Status,
    ProposalText,
    QuotedAmount,
    RateCardUrl,
    PortfolioItems,
    FollowerCountAtApplication,
    EngagementRateAtApplication,
    ReviewedAt,
    ReviewedBy,
    RejectionReason,
    Notes,
    CreatedAt,
    UpdatedAt,
}

fn create_deal_application_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(DealApplication::Table)
        .if_not_exists()
        .col(pk_auto(DealApplication::Id))
        .col(ColumnDef::new(DealApplication::CampaignId).integer().not_null())
        .col(ColumnDef::new(DealApplication::InfluencerId).integer().not_null())
        .col(enum_col(DealApplication::Status, "pending"))
        .col(ColumnDef::new(DealApplication::ProposalText).text())
        .col(ColumnDef::new(DealApplication::QuotedAmount).double())
        .col(ColumnDef::new(DealApplication::RateCardUrl).string_len(512))
        .col(json_list_col(DealApplication::PortfolioItems))
        .col(
            ColumnDef::new(DealApplication::FollowerCountAtApplication)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(
            ColumnDef::new(DealApplication::EngagementRateAtApplication)
                .double()
                .not_null()
                .default(0.0),
        )
        .col(nullable_timestamp_col(DealApplication::ReviewedAt))
        .col(ColumnDef::new(DealApplication::ReviewedBy).integer().null())
        .col(ColumnDef::new(DealApplication::RejectionReason).text())
        .col(ColumnDef::new(DealApplication::Notes).text())
        .col(timestamp_col(DealApplication::CreatedAt))
        .col(timestamp_col(DealApplication::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_deal_application_campaign")
                .from(DealApplication::Table, DealApplication::CampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_deal_application_influencer")
                .from(DealApplication::Table, DealApplication::InfluencerId)
                .to(Influencer::Table, Influencer::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_deal_application_reviewer")
                .from(DealApplication::Table, DealApplication::ReviewedBy)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_deal_application_indexes(
    _backend: DatabaseBackend,
) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        // one application per influencer and campaign
        Index::create()
            .name("ux_deal_application_campaign_influencer")
            .table(DealApplication::Table)
            .col(DealApplication::CampaignId)
            .col(DealApplication::InfluencerId)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_deal_application_influencer_id")
            .table(DealApplication::Table)
            .col(DealApplication::InfluencerId)
            .to_owned(),
    ])
}
