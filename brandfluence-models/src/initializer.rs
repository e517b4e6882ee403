use crate::idens::{
    brand::Brand, campaign::Campaign, content::Content, deal_application::DealApplication,
    influencer::Influencer, message::Message, milestone::Milestone, notification::Notification,
    payment::Payment, task::Task, user::User,
};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// Schema description of one table, derived on its iden enum.
pub trait TableInitializer: Send + Sync {
    /// Creation order; referenced tables come first
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    /// Whether the table carries an `updated_at` column
    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

/// Every table of the marketplace schema, sorted by creation order.
pub fn initializers() -> Vec<Box<dyn TableInitializer>> {
    let mut initializers: Vec<Box<dyn TableInitializer>> = vec![
        Box::new(User::Table),
        Box::new(Brand::Table),
        Box::new(Influencer::Table),
        Box::new(Campaign::Table),
        Box::new(DealApplication::Table),
        Box::new(Task::Table),
        Box::new(Content::Table),
        Box::new(Milestone::Table),
        Box::new(Payment::Table),
        Box::new(Message::Table),
        Box::new(Notification::Table),
    ];
    initializers.sort_by_key(|i| i.order());
    initializers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializers_are_ordered_and_named() {
        let names: Vec<String> = initializers()
            .iter()
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("user"));
        assert_eq!(names.last().map(String::as_str), Some("notification"));
        assert!(names.contains(&"deal_application".to_string()));
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_append_only_tables_have_no_update_column() {
        for init in initializers() {
            let expected = !matches!(init.name(), "message" | "notification");
            assert_eq!(init.has_update_col(), expected, "{}", init.name());
        }
    }
}
