pub mod brand;
pub mod campaign;
pub mod content;
pub mod deal_application;
pub mod influencer;
pub mod message;
pub mod milestone;
pub mod notification;
pub mod payment;
pub mod task;
pub mod user;

use sea_orm_migration::prelude::*;

// Referenced tables must be created before their dependents
const INIT_USER_ORDER: i32 = 1;
const INIT_BRAND_ORDER: i32 = INIT_USER_ORDER + 1;
const INIT_INFLUENCER_ORDER: i32 = INIT_BRAND_ORDER + 1;
const INIT_CAMPAIGN_ORDER: i32 = INIT_INFLUENCER_ORDER + 1;
const INIT_DEAL_APPLICATION_ORDER: i32 = INIT_CAMPAIGN_ORDER + 1;
const INIT_TASK_ORDER: i32 = INIT_DEAL_APPLICATION_ORDER + 1;
const INIT_CONTENT_ORDER: i32 = INIT_TASK_ORDER + 1;
const INIT_MILESTONE_ORDER: i32 = INIT_CONTENT_ORDER + 1;
const INIT_PAYMENT_ORDER: i32 = INIT_MILESTONE_ORDER + 1;
const INIT_MESSAGE_ORDER: i32 = INIT_PAYMENT_ORDER + 1;
const INIT_NOTIFICATION_ORDER: i32 = INIT_MESSAGE_ORDER + 1;

/// Non-null UTC timestamp column defaulting to the insert time
fn timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// Nullable UTC timestamp column
fn nullable_timestamp_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).timestamp_with_time_zone().null().to_owned()
}

/// Non-null JSON array column defaulting to `[]`
fn json_list_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .json()
        .not_null()
        .default("[]")
        .to_owned()
}

/// Status-like string column backed by a string active enum
fn enum_col<T: IntoIden>(col: T, default: &str) -> ColumnDef {
    ColumnDef::new(col)
        .string_len(32)
        .not_null()
        .default(default)
        .to_owned()
}
