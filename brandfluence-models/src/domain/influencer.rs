use super::common::{assign, PageParams};
use crate::entities::prelude::InfluencerActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_aux::prelude::*;
use serde_json::Value as Json;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[sea_orm(active_model = "crate::entities::influencer::ActiveModel")]
#[serde(deny_unknown_fields)]
pub struct NewInfluencer {
    #[validate(length(min = 1, max = 255, message = "full_name is required"))]
    pub full_name: String,
    pub bio: Option<String>,
    pub niche: Option<String>,
    pub location: Option<String>,
    pub profile_picture_url: Option<String>,
    pub instagram_handle: Option<String>,
    pub youtube_handle: Option<String>,
    pub tiktok_handle: Option<String>,
    pub twitter_handle: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "total_followers must not be negative"))]
    pub total_followers: i64,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "average_engagement_rate must not be negative"))]
    pub average_engagement_rate: f64,
    pub portfolio_url: Option<String>,
    #[validate(range(min = 0.0, message = "base_rate must not be negative"))]
    pub base_rate: Option<f64>,
    pub extra_data: Option<Json>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct InfluencerPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub full_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub niche: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub profile_picture_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub instagram_handle: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub youtube_handle: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub tiktok_handle: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub twitter_handle: Option<Option<String>>,
    pub total_followers: Option<i64>,
    pub average_engagement_rate: Option<f64>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub portfolio_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub base_rate: Option<Option<f64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub extra_data: Option<Option<Json>>,
}

impl InfluencerPatch {
    pub fn cleared_required(&self) -> Option<&'static str> {
        match &self.full_name {
            Some(None) => Some("full_name"),
            Some(Some(name)) if name.trim().is_empty() => Some("full_name"),
            _ => None,
        }
    }

    /// First numeric field holding a negative value
    pub fn negative_field(&self) -> Option<&'static str> {
        if self.total_followers.is_some_and(|v| v < 0) {
            return Some("total_followers");
        }
        if self.average_engagement_rate.is_some_and(|v| v < 0.0) {
            return Some("average_engagement_rate");
        }
        if matches!(self.base_rate, Some(Some(v)) if v < 0.0) {
            return Some("base_rate");
        }
        None
    }

    pub fn apply_to(self, am: &mut InfluencerActiveModel) {
        assign(&mut am.full_name, self.full_name.flatten());
        assign(&mut am.bio, self.bio);
        assign(&mut am.niche, self.niche);
        assign(&mut am.location, self.location);
        assign(&mut am.profile_picture_url, self.profile_picture_url);
        assign(&mut am.instagram_handle, self.instagram_handle);
        assign(&mut am.youtube_handle, self.youtube_handle);
        assign(&mut am.tiktok_handle, self.tiktok_handle);
        assign(&mut am.twitter_handle, self.twitter_handle);
        assign(&mut am.total_followers, self.total_followers);
        assign(&mut am.average_engagement_rate, self.average_engagement_rate);
        assign(&mut am.portfolio_url, self.portfolio_url);
        assign(&mut am.base_rate, self.base_rate);
        assign(&mut am.extra_data, self.extra_data);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InfluencerListParams {
    pub niche: Option<String>,
    pub location: Option<String>,
    /// Inclusive lower bound on `total_followers`
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub min_followers: Option<i64>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_numbers_are_flagged() {
        let patch: InfluencerPatch =
            serde_json::from_str(r#"{"total_followers": -1}"#).unwrap();
        assert_eq!(patch.negative_field(), Some("total_followers"));
        let patch: InfluencerPatch = serde_json::from_str(r#"{"base_rate": null}"#).unwrap();
        assert_eq!(patch.negative_field(), None);
    }

    #[test]
    fn test_new_influencer_validation() {
        let new: NewInfluencer = serde_json::from_str(
            r#"{"full_name": "Ivy", "total_followers": -5}"#,
        )
        .unwrap();
        assert!(new.validate().is_err());
    }
}
