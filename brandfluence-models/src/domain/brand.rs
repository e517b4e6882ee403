use super::common::{assign, PageParams};
use crate::entities::prelude::BrandActiveModel;
use sea_orm::DeriveIntoActiveModel;
use serde::Deserialize;
use serde_json::Value as Json;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[sea_orm(active_model = "crate::entities::brand::ActiveModel")]
#[serde(deny_unknown_fields)]
pub struct NewBrand {
    #[validate(length(min = 1, max = 255, message = "company_name is required"))]
    pub company_name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    #[validate(url(message = "website must be a url"))]
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub location: Option<String>,
    #[validate(email(message = "contact_email is invalid"))]
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub extra_data: Option<Json>,
}

/// Partial brand profile update; `null` clears nullable columns
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BrandPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub company_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub industry: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub website: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub logo_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub location: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub extra_data: Option<Option<Json>>,
}

impl BrandPatch {
    /// Names of required columns the patch tries to clear
    pub fn cleared_required(&self) -> Option<&'static str> {
        match &self.company_name {
            Some(None) => Some("company_name"),
            Some(Some(name)) if name.trim().is_empty() => Some("company_name"),
            _ => None,
        }
    }

    pub fn apply_to(self, am: &mut BrandActiveModel) {
        assign(&mut am.company_name, self.company_name.flatten());
        assign(&mut am.industry, self.industry);
        assign(&mut am.description, self.description);
        assign(&mut am.website, self.website);
        assign(&mut am.logo_url, self.logo_url);
        assign(&mut am.location, self.location);
        assign(&mut am.contact_email, self.contact_email);
        assign(&mut am.contact_phone, self.contact_phone);
        assign(&mut am.extra_data, self.extra_data);
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BrandListParams {
    /// Case-insensitive substring match
    pub industry: Option<String>,
    pub location: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn test_patch_distinguishes_absent_and_null() {
        let patch: BrandPatch =
            serde_json::from_str(r#"{"industry": null, "location": "Berlin"}"#).unwrap();
        assert_eq!(patch.industry, Some(None));
        assert_eq!(patch.location, Some(Some("Berlin".into())));
        assert_eq!(patch.website, None);

        let mut am = BrandActiveModel::default();
        patch.apply_to(&mut am);
        assert_eq!(am.industry, ActiveValue::Set(None));
        assert_eq!(am.location, ActiveValue::Set(Some("Berlin".into())));
        assert!(am.website.is_not_set());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let res: Result<BrandPatch, _> = serde_json::from_str(r#"{"user_id": 3}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_clearing_company_name_is_flagged() {
        let patch: BrandPatch = serde_json::from_str(r#"{"company_name": null}"#).unwrap();
        assert_eq!(patch.cleared_required(), Some("company_name"));
    }
}
