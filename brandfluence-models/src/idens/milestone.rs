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
    order = super::INIT_MILESTONE_ORDER,
    create_table = create_milestone_table,
    create_indexes = create_milestone_indexes,
))]
pub enum Milestone {
    Table,
    Id,
    CampaignId,
    InfluencerId,
    Title,
    Description,
    Amount,
    PayoutPercentage,
    Status,
    DueDate,
    CompletedAt,
    ApprovedAt,
    ApprovedBy,
    ProofUrls,
    ProofDescription,
    SubmissionNotes,
    RejectionReason,
    ReviewNotes,
    PaymentConfirmed,
    PaymentConfirmedAt,
    PaymentConfirmedBy,
    ContractAddress,
    TransactionHash,
    CreatedAt,
    UpdatedAt,
}

fn create_milestone_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Milestone::Table)
        .if_not_exists()
        .col(pk_auto(Milestone::Id))
        .col(ColumnDef::new(Milestone::CampaignId).integer().not_null())
        .col(ColumnDef::new(Milestone::InfluencerId).integer().not_null())
        .col(ColumnDef::new(Milestone::Title).string_len(255).not_null())
        .col(ColumnDef::new(Milestone::Description).text())
        .col(ColumnDef::new(Milestone::Amount).double().not_null())
        .col(ColumnDef::new(Milestone::PayoutPercentage).double())
        .col(enum_col(Milestone::Status, "pending"))
        .col(nullable_timestamp_col(Milestone::DueDate))
        .col(nullable_timestamp_col(Milestone::CompletedAt))
        .col(nullable_timestamp_col(Milestone::ApprovedAt))
        .col(ColumnDef::new(Milestone::ApprovedBy).integer().null())
        .col(json_list_col(Milestone::ProofUrls))
        .col(ColumnDef::new(Milestone::ProofDescription).text())
        .col(ColumnDef::new(Milestone::SubmissionNotes).text())
        .col(ColumnDef::new(Milestone::RejectionReason).text())
        .col(ColumnDef::new(Milestone::ReviewNotes).text())
        .col(enum_col(Milestone::PaymentConfirmed, "pending"))
        .col(nullable_timestamp_col(Milestone::PaymentConfirmedAt))
        .col(ColumnDef::new(Milestone::PaymentConfirmedBy).integer().null())
        .col(ColumnDef::new(Milestone::ContractAddress).string_len(128))
        .col(ColumnDef::new(Milestone::TransactionHash).string_len(128))
        .col(timestamp_col(Milestone::CreatedAt))
        .col(timestamp_col(Milestone::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_milestone_campaign")
                .from(Milestone::Table, Milestone::CampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_milestone_influencer")
                .from(Milestone::Table, Milestone::InfluencerId)
                .to(Influencer::Table, Influencer::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_milestone_approver")
                .from(Milestone::Table, Milestone::ApprovedBy)
                .to(User::Table, User::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_milestone_payment_confirmer")
                .from(Milestone::Table, Milestone::PaymentConfirmedBy)
                .to(User::Table, User::Id),
        )
        .to_owned()
}

fn create_milestone_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_milestone_campaign_id")
            .table(Milestone::Table)
            .col(Milestone::CampaignId)
            .to_owned(),
        Index::create()
            .name("idx_milestone_influencer_id")
            .table(Milestone::Table)
            .col(Milestone::InfluencerId)
            .to_owned(),
    ])
}
