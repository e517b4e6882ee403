use super::common::PageParams;
use crate::enums::common::NotificationType;
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};
use serde_aux::prelude::*;
use validator::Validate;

/// A notification addressed to one user
#[derive(Clone, Debug, PartialEq, Serialize, DeriveIntoActiveModel)]
#[sea_orm(active_model = "crate::entities::notification::ActiveModel")]
pub struct Notice {
    pub user_id: i32,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_campaign_id: Option<i32>,
    pub related_application_id: Option<i32>,
    pub related_milestone_id: Option<i32>,
    pub action_url: Option<String>,
}

impl Notice {
    pub fn new(
        user_id: i32,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            notification_type,
            title: title.into(),
            message: message.into(),
            related_campaign_id: None,
            related_application_id: None,
            related_milestone_id: None,
            action_url: None,
        }
    }

    pub fn campaign(mut self, id: i32) -> Self {
        self.related_campaign_id = Some(id);
        self.action_url = Some(format!("/campaigns/{id}"));
        self
    }

    pub fn application(mut self, id: i32) -> Self {
        self.related_application_id = Some(id);
        self
    }

    pub fn milestone(mut self, id: i32) -> Self {
        self.related_milestone_id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NotificationListParams {
    #[serde(default, deserialize_with = "deserialize_bool_from_anything")]
    pub unread_only: bool,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}
