use super::{campaign::Campaign, enum_col, nullable_timestamp_col, timestamp_col};
use crate::{constants::DEFAULT_CURRENCY, initializer::TableInitializer};
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_PAYMENT_ORDER,
    create_table = create_payment_table,
    create_indexes = create_payment_indexes,
))]
pub enum Payment {
    Table,
    Id,
    CampaignId,
    Amount,
    Currency,
    Status,
    PaymentMethod,
    ContractAddress,
    TransactionHash,
    PaidAt,
    CreatedAt,
    UpdatedAt,
}

fn create_payment_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Payment::Table)
        .if_not_exists()
        .col(pk_auto(Payment::Id))
        .col(ColumnDef::new(Payment::CampaignId).integer().not_null())
        .col(ColumnDef::new(Payment::Amount).double().not_null())
        .col(
            ColumnDef::new(Payment::Currency)
                .string_len(3)
                .not_null()
                .default(DEFAULT_CURRENCY),
        )
        .col(enum_col(Payment::Status, "pending"))
        .col(ColumnDef::new(Payment::PaymentMethod).string_len(64))
        .col(ColumnDef::new(Payment::ContractAddress).string_len(128))
        .col(ColumnDef::new(Payment::TransactionHash).string_len(128))
        .col(nullable_timestamp_col(Payment::PaidAt))
        .col(timestamp_col(Payment::CreatedAt))
        .col(timestamp_col(Payment::UpdatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_payment_campaign")
                .from(Payment::Table, Payment::CampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .to_owned()
}

fn create_payment_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_payment_campaign_id")
        .table(Payment::Table)
        .col(Payment::CampaignId)
        .to_owned()])
}
