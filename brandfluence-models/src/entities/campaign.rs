//! `SeaORM` Entity for brand campaigns

use super::json::{MilestoneTemplates, StringList};
use crate::enums::{common::BudgetType, status::CampaignStatus};
use brandfluence_macros::AutoTimestamps;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, AutoTimestamps)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand_id: i32,
    /// Influencer chosen through an approved application
    pub influencer_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub brief: Option<String>,
    pub status: CampaignStatus,
    pub budget: f64,
    pub budget_negotiable: BudgetType,
    pub deadline: DateTimeUtc,
    pub required_follower_count: i64,
    pub platforms: StringList,
    pub deliverables: StringList,
    pub milestones_template: MilestoneTemplates,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub target_audience: Option<Json>,
    pub content_guidelines: Option<String>,
    // server-owned counters
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub engagement_rate: f64,
    pub view_count: i64,
    pub application_count: i64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::BrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    #[sea_orm(
        belongs_to = "super::influencer::Entity",
        from = "Column::InfluencerId",
        to = "super::influencer::Column::Id"
    )]
    Influencer,
    #[sea_orm(has_many = "super::deal_application::Entity")]
    DealApplication,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestone,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::deal_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DealApplication.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestone.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}
