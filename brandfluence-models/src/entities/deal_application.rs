//! `SeaORM` Entity for influencer applications to campaigns

use super::json::StringList;
use crate::enums::status::ApplicationStatus;
use brandfluence_macros::AutoTimestamps;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, AutoTimestamps)]
#[sea_orm(table_name = "deal_application")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campaign_id: i32,
    pub influencer_id: i32,
    pub status: ApplicationStatus,
    pub proposal_text: Option<String>,
    pub quoted_amount: Option<f64>,
    pub rate_card_url: Option<String>,
    pub portfolio_items: StringList,
    /// Snapshot of the influencer's reach when applying
    pub follower_count_at_application: i64,
    pub engagement_rate_at_application: f64,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewed_by: Option<i32>,
    pub rejection_reason: Option<String>,
    pub notes: Option<String>,
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

impl Related<super::influencer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Influencer.def()
    }
}
