//! `SeaORM` Entity for milestone payouts

use super::json::StringList;
use crate::enums::{common::PaymentConfirmation, status::MilestoneStatus};
use brandfluence_macros::AutoTimestamps;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, AutoTimestamps)]
#[sea_orm(table_name = "milestone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub influencer_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// Fixed at creation, independent of later budget changes
    pub amount: f64,
    pub payout_percentage: Option<f64>,
    pub status: MilestoneStatus,
    pub due_date: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub approved_at: Option<DateTimeUtc>,
    pub approved_by: Option<i32>,
    pub proof_urls: StringList,
    pub proof_description: Option<String>,
    pub submission_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub review_notes: Option<String>,
    pub payment_confirmed: PaymentConfirmation,
    pub payment_confirmed_at: Option<DateTimeUtc>,
    pub payment_confirmed_by: Option<i32>,
    pub contract_address: Option<String>,
    pub transaction_hash: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign::Entity",
        from = "Column::CampaignId",
        to = "super::campaign::Column::Id"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::influencer::Entity",
        from = "Column::InfluencerId",
        to = "super::influencer::Column::Id"
    )]
    Influencer,
}

impl Related<super::campaign::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}
