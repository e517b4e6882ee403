use super::common::PageParams;
use crate::entities::prelude::StringList;
use serde::Deserialize;
use validator::Validate;

/// Direct message (recipient) or campaign thread post (campaign only)
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewMessage {
    pub recipient_id: Option<i32>,
    pub campaign_id: Option<i32>,
    #[validate(length(max = 255))]
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[serde(default)]
    pub attachments: StringList,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct MessageListParams {
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}
