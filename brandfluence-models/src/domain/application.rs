use crate::{entities::prelude::StringList, enums::status::ApplicationStatus};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewApplication {
    pub proposal_text: Option<String>,
    /// Only accepted on negotiable campaigns
    pub quoted_amount: Option<f64>,
    #[validate(url(message = "rate_card_url must be a url"))]
    pub rate_card_url: Option<String>,
    #[serde(default)]
    pub portfolio_items: StringList,
}

/// Brand decision on an application
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    pub rejection_reason: Option<String>,
    pub notes: Option<String>,
}
