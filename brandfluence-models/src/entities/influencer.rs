//! `SeaORM` Entity for influencer profiles

use brandfluence_macros::AutoTimestamps;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, AutoTimestamps)]
#[sea_orm(table_name = "influencer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub full_name: String,
    pub bio: Option<String>,
    pub niche: Option<String>,
    pub location: Option<String>,
    pub profile_picture_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub youtube_handle: Option<String>,
    pub tiktok_handle: Option<String>,
    pub twitter_handle: Option<String>,
    pub total_followers: i64,
    pub average_engagement_rate: f64,
    pub portfolio_url: Option<String>,
    pub base_rate: Option<f64>,
    pub extra_data: Option<Json>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::deal_application::Entity")]
    DealApplication,
    #[sea_orm(has_many = "super::task::Entity")]
    Task,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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
