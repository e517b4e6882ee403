//! JSON column payloads shared by several entities.

use brandfluence_macros::IntoActiveValue;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Ordered list of strings stored as a JSON array
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    IntoActiveValue,
    FromJsonQueryResult,
)]
pub struct StringList(pub Vec<String>);

impl From<Vec<String>> for StringList {
    fn from(v: Vec<String>) -> Self {
        Self(v)
    }
}

impl StringList {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One payout step suggested by a campaign for milestone creation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct MilestoneTemplate {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(range(exclusive_min = 0.0, max = 100.0))]
    pub payout_percentage: f64,
}

#[derive(
    Clone, Debug, Default, PartialEq, Serialize, Deserialize, IntoActiveValue, FromJsonQueryResult,
)]
pub struct MilestoneTemplates(pub Vec<MilestoneTemplate>);

impl MilestoneTemplates {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all payout percentages
    pub fn total_percentage(&self) -> f64 {
        self.0.iter().map(|t| t.payout_percentage).sum()
    }
}
