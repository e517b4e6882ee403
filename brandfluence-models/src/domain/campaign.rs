use super::common::{assign, PageParams};
use crate::{
    entities::prelude::{CampaignActiveModel, MilestoneTemplates, StringList},
    enums::{common::BudgetType, status::CampaignStatus},
};
use chrono::{DateTime, Utc};
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_json::Value as Json;
use validator::Validate;

/// Campaign creation payload.
///
/// Metric counters are server-owned and not representable here, so a payload
/// carrying them fails to deserialize.
#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[sea_orm(active_model = "crate::entities::campaign::ActiveModel")]
#[serde(deny_unknown_fields)]
pub struct NewCampaign {
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub brief: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "budget must be positive"))]
    pub budget: f64,
    #[serde(default)]
    pub budget_negotiable: BudgetType,
    pub deadline: DateTime<Utc>,
    #[serde(default)]
    #[validate(range(min = 0, message = "required_follower_count must not be negative"))]
    pub required_follower_count: i64,
    #[serde(default)]
    pub platforms: StringList,
    #[serde(default)]
    pub deliverables: StringList,
    #[serde(default)]
    pub milestones_template: MilestoneTemplates,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub target_audience: Option<Json>,
    pub content_guidelines: Option<String>,
}

/// Partial campaign update restricted to brand-editable columns
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CampaignPatch {
    #[validate(length(min = 1, max = 255, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub brief: Option<Option<String>>,
    pub status: Option<CampaignStatus>,
    pub budget: Option<f64>,
    pub budget_negotiable: Option<BudgetType>,
    pub deadline: Option<DateTime<Utc>>,
    #[validate(range(min = 0, message = "required_follower_count must not be negative"))]
    pub required_follower_count: Option<i64>,
    pub platforms: Option<StringList>,
    pub deliverables: Option<StringList>,
    pub milestones_template: Option<MilestoneTemplates>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub start_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub end_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub target_audience: Option<Option<Json>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub content_guidelines: Option<Option<String>>,
    /// Assigned influencer; `null` unassigns
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub influencer_id: Option<Option<i32>>,
}

impl CampaignPatch {
    /// Applies every field except `status`, which goes through the transition policy
    pub fn apply_to(self, am: &mut CampaignActiveModel) {
        assign(&mut am.title, self.title);
        assign(&mut am.description, self.description);
        assign(&mut am.brief, self.brief);
        assign(&mut am.budget, self.budget);
        assign(&mut am.budget_negotiable, self.budget_negotiable);
        assign(&mut am.deadline, self.deadline);
        assign(&mut am.required_follower_count, self.required_follower_count);
        assign(&mut am.platforms, self.platforms);
        assign(&mut am.deliverables, self.deliverables);
        assign(&mut am.milestones_template, self.milestones_template);
        assign(&mut am.start_date, self.start_date);
        assign(&mut am.end_date, self.end_date);
        assign(&mut am.target_audience, self.target_audience);
        assign(&mut am.content_guidelines, self.content_guidelines);
        assign(&mut am.influencer_id, self.influencer_id);
    }
}

/// Performance counters recorded by an administrator
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CampaignMetrics {
    #[validate(range(min = 0, message = "impressions must not be negative"))]
    pub impressions: Option<i64>,
    #[validate(range(min = 0, message = "clicks must not be negative"))]
    pub clicks: Option<i64>,
    #[validate(range(min = 0, message = "conversions must not be negative"))]
    pub conversions: Option<i64>,
    #[validate(range(min = 0.0, message = "engagement_rate must not be negative"))]
    pub engagement_rate: Option<f64>,
}

impl CampaignMetrics {
    pub fn apply_to(self, am: &mut CampaignActiveModel) {
        assign(&mut am.impressions, self.impressions);
        assign(&mut am.clicks, self.clicks);
        assign(&mut am.conversions, self.conversions);
        assign(&mut am.engagement_rate, self.engagement_rate);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CampaignListParams {
    pub status: Option<CampaignStatus>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}
