use super::common::assign;
use crate::{
    entities::prelude::{ContentActiveModel, StringList},
    enums::{common::ContentType, status::ContentStatus},
};
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[sea_orm(active_model = "crate::entities::content::ActiveModel")]
#[serde(deny_unknown_fields)]
pub struct NewContent {
    #[validate(range(min = 1, message = "task_id is required"))]
    pub task_id: i32,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub file_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub additional_files: StringList,
    pub platform: Option<String>,
    pub post_url: Option<String>,
}

/// Submission body when the task is addressed by the route instead.
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContentUpload {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub content_type: ContentType,
    pub file_url: Option<String>,
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub additional_files: StringList,
    pub platform: Option<String>,
    pub post_url: Option<String>,
}

impl ContentUpload {
    pub fn for_task(self, task_id: i32) -> NewContent {
        NewContent {
            task_id,
            title: self.title,
            description: self.description,
            content_type: self.content_type,
            file_url: self.file_url,
            thumbnail_url: self.thumbnail_url,
            additional_files: self.additional_files,
            platform: self.platform,
            post_url: self.post_url,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ContentPatch {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    pub content_type: Option<ContentType>,
    pub status: Option<ContentStatus>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub file_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub thumbnail_url: Option<Option<String>>,
    pub additional_files: Option<StringList>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub platform: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub post_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub review_notes: Option<Option<String>>,
}

impl ContentPatch {
    /// Whether the patch edits the deliverable itself rather than its review state
    pub fn has_artifact_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.content_type.is_some()
            || self.file_url.is_some()
            || self.thumbnail_url.is_some()
            || self.additional_files.is_some()
            || self.platform.is_some()
            || self.post_url.is_some()
    }

    /// Applies artifact fields and review notes; status is set by the caller
    pub fn apply_to(self, am: &mut ContentActiveModel) {
        assign(&mut am.title, self.title);
        assign(&mut am.description, self.description);
        assign(&mut am.content_type, self.content_type);
        assign(&mut am.file_url, self.file_url);
        assign(&mut am.thumbnail_url, self.thumbnail_url);
        assign(&mut am.additional_files, self.additional_files);
        assign(&mut am.platform, self.platform);
        assign(&mut am.post_url, self.post_url);
        assign(&mut am.review_notes, self.review_notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_only_patch_has_no_artifact_changes() {
        let patch: ContentPatch =
            serde_json::from_str(r#"{"status":"approved","review_notes":"great"}"#).unwrap();
        assert!(!patch.has_artifact_changes());
        let patch: ContentPatch = serde_json::from_str(r#"{"post_url":null}"#).unwrap();
        assert!(patch.has_artifact_changes());
    }
}
