use super::common::assign;
use crate::{
    entities::prelude::TaskActiveModel,
    enums::{common::TaskPriority, status::TaskStatus},
};
use chrono::{DateTime, Utc};
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_aux::prelude::*;
use serde_json::Value as Json;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[sea_orm(active_model = "crate::entities::task::ActiveModel")]
#[serde(deny_unknown_fields)]
pub struct NewTask {
    #[validate(range(min = 1, message = "campaign_id is required"))]
    pub campaign_id: i32,
    #[validate(range(min = 1, message = "influencer_id is required"))]
    pub influencer_id: i32,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub due_date: Option<DateTime<Utc>>,
    pub deliverable_type: Option<String>,
    pub requirements: Option<Json>,
    #[serde(default)]
    #[validate(range(min = 0, message = "position must not be negative"))]
    pub position: i32,
}

/// Partial task update.
///
/// `campaign_id` and `influencer_id` are fixed at creation; naming them in a
/// patch fails deserialization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub deliverable_type: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub requirements: Option<Option<Json>>,
    #[validate(range(min = 0, message = "position must not be negative"))]
    pub position: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub review_notes: Option<Option<String>>,
}

impl TaskPatch {
    /// Fields present beyond the board columns an assignee may move
    pub fn non_board_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.title.is_some() {
            fields.push("title");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.priority.is_some() {
            fields.push("priority");
        }
        if self.due_date.is_some() {
            fields.push("due_date");
        }
        if self.deliverable_type.is_some() {
            fields.push("deliverable_type");
        }
        if self.requirements.is_some() {
            fields.push("requirements");
        }
        if self.review_notes.is_some() {
            fields.push("review_notes");
        }
        fields
    }

    /// Applies descriptive fields; status and review stamps are set by the caller
    pub fn apply_to(self, am: &mut TaskActiveModel) {
        assign(&mut am.title, self.title);
        assign(&mut am.description, self.description);
        assign(&mut am.priority, self.priority);
        assign(&mut am.due_date, self.due_date);
        assign(&mut am.deliverable_type, self.deliverable_type);
        assign(&mut am.requirements, self.requirements);
        assign(&mut am.position, self.position);
        assign(&mut am.review_notes, self.review_notes);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TaskListParams {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub campaign_id: Option<i32>,
    pub status: Option<TaskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_cannot_name_immutable_fields() {
        for body in [r#"{"campaign_id": 2}"#, r#"{"influencer_id": 9}"#] {
            let res: Result<TaskPatch, _> = serde_json::from_str(body);
            assert!(res.is_err(), "{body}");
        }
    }

    #[test]
    fn test_board_only_patch() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"status":"in_progress","position":3}"#).unwrap();
        assert!(patch.non_board_fields().is_empty());
        let patch: TaskPatch = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(patch.non_board_fields(), vec!["title"]);
    }

    #[test]
    fn test_new_task_defaults() {
        let task: NewTask =
            serde_json::from_str(r#"{"campaign_id":1,"influencer_id":2,"title":"Post"}"#).unwrap();
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.position, 0);
    }
}
