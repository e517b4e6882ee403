use crate::enums::status::PaymentStatus;
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct NewPayment {
    #[validate(range(min = 1, message = "campaign_id is required"))]
    pub campaign_id: i32,
    #[validate(range(exclusive_min = 0.0, message = "amount must be positive"))]
    pub amount: f64,
    /// ISO 4217 code; defaults to USD
    #[validate(length(equal = 3, message = "currency must be a 3-letter code"))]
    pub currency: Option<String>,
    pub payment_method: Option<String>,
    pub contract_address: Option<String>,
    pub transaction_hash: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PaymentStatusChange {
    pub status: PaymentStatus,
    pub transaction_hash: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_and_amount_validation() {
        let ok: NewPayment =
            serde_json::from_str(r#"{"campaign_id":1,"amount":12.5,"currency":"EUR"}"#).unwrap();
        assert!(ok.validate().is_ok());
        let bad: NewPayment =
            serde_json::from_str(r#"{"campaign_id":1,"amount":0,"currency":"EURO"}"#).unwrap();
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("amount"));
        assert!(fields.contains_key("currency"));
    }
}
