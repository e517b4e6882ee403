//! `SeaORM` Entity for deliverables submitted against tasks

use super::json::StringList;
use crate::enums::{common::ContentType, status::ContentStatus};
use brandfluence_macros::AutoTimestamps;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize, AutoTimestamps)]
#[sea_orm(table_name = "content")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub task_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub status: ContentStatus,
    pub file_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub additional_files: StringList,
    pub platform: Option<String>,
    pub post_url: Option<String>,
    pub review_notes: Option<String>,
    pub reviewed_at: Option<DateTimeUtc>,
    pub reviewer_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::task::Entity",
        from = "Column::TaskId",
        to = "super::task::Column::Id"
    )]
    Task,
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}
