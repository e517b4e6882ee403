pub mod common;
pub mod status;

/// Renders string-backed active enums using their stored value.
macro_rules! display_as_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&sea_orm::ActiveEnum::to_value(self))
                }
            }
        )*
    };
}

display_as_value!(
    common::UserRole,
    common::BudgetType,
    common::TaskPriority,
    common::ContentType,
    common::PaymentConfirmation,
    common::NotificationType,
    status::CampaignStatus,
    status::ApplicationStatus,
    status::TaskStatus,
    status::ContentStatus,
    status::MilestoneStatus,
    status::PaymentStatus,
);
