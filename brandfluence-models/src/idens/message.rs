use super::{campaign::Campaign, json_list_col, timestamp_col, user::User};
use crate::initializer::TableInitializer;
use brandfluence_macros::TableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, TableInitializer)]
#[table(meta(
    order = super::INIT_MESSAGE_ORDER,
    create_table = create_message_table,
    create_indexes = create_message_indexes,
))]
pub enum Message {
    Table,
    Id,
    SenderId,
    RecipientId,
    CampaignId,
    Subject,
    Content,
    IsRead,
    IsGroupMessage,
    Attachments,
    CreatedAt,
}

fn create_message_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Message::Table)
        .if_not_exists()
        .col(pk_auto(Message::Id))
        .col(ColumnDef::new(Message::SenderId).integer().not_null())
        .col(ColumnDef::new(Message::RecipientId).integer().null())
        .col(ColumnDef::new(Message::CampaignId).integer().null())
        .col(ColumnDef::new(Message::Subject).string_len(255))
        .col(ColumnDef::new(Message::Content).text().not_null())
        .col(
            ColumnDef::new(Message::IsRead)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Message::IsGroupMessage)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(json_list_col(Message::Attachments))
        .col(timestamp_col(Message::CreatedAt))
        .foreign_key(
            ForeignKey::create()
                .name("fk_message_sender")
                .from(Message::Table, Message::SenderId)
                .to(User::Table, User::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_message_recipient")
                .from(Message::Table, Message::RecipientId)
                .to(User::Table, User::Id),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_message_campaign")
                .from(Message::Table, Message::CampaignId)
                .to(Campaign::Table, Campaign::Id),
        )
        .to_owned()
}

fn create_message_indexes(_backend: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("idx_message_recipient_id")
            .table(Message::Table)
            .col(Message::RecipientId)
            .to_owned(),
        Index::create()
            .name("idx_message_campaign_id")
            .table(Message::Table)
            .col(Message::CampaignId)
            .to_owned(),
    ])
}
