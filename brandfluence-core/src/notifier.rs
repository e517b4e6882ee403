use async_trait::async_trait;
use brandfluence_error::DomainResult;
use brandfluence_models::domain::prelude::Notice;
use brandfluence_repository::NotificationRepository;
use sea_orm::{DatabaseConnection, IntoActiveModel, Set};
use tracing::debug;

/// Outbound notification channel.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, notice: Notice) -> DomainResult<()>;
}

/// Persists each notice as an unread `notification` row.
pub struct StoredNotifier {
    db: DatabaseConnection,
}

impl StoredNotifier {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Notifier for StoredNotifier {
    async fn notify(&self, notice: Notice) -> DomainResult<()> {
        let mut am = notice.into_active_model();
        am.is_read = Set(false);
        let stored = NotificationRepository::create(am, &self.db).await?;
        debug!(id = stored.id, user_id = stored.user_id, "Notification stored");
        Ok(())
    }
}
