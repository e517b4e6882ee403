use crate::{entities::prelude::StringList, enums::status::MilestoneStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_aux::prelude::*;
use validator::Validate;

/// Milestone creation payload; exactly one of `amount` or `payout_percentage`
#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewMilestone {
    #[validate(range(min = 1, message = "campaign_id is required"))]
    pub campaign_id: i32,
    #[validate(range(min = 1, message = "influencer_id is required"))]
    pub influencer_id: i32,
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub payout_percentage: Option<f64>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MilestoneProof {
    #[serde(default)]
    pub proof_urls: StringList,
    pub proof_description: Option<String>,
    pub submission_notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MilestoneReview {
    /// `approved` or `rejected`
    pub status: MilestoneStatus,
    pub rejection_reason: Option<String>,
    pub review_notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MilestonePaymentConfirmation {
    pub confirmed: bool,
    #[validate(length(max = 128))]
    pub contract_address: Option<String>,
    #[validate(length(max = 128))]
    pub transaction_hash: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CampaignScopeParams {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    #[validate(range(min = 1, message = "campaign_id is required"))]
    pub campaign_id: i32,
}
