use crate::notifier::{Notifier, StoredNotifier};
use brandfluence_models::{domain::prelude::Notice, settings::TransitionPolicy};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::warn;

/// Shared handles every domain operation runs against.
#[derive(Clone)]
pub struct CoreContext {
    db: DatabaseConnection,
    notifier: Arc<dyn Notifier>,
    policy: TransitionPolicy,
}

impl CoreContext {
    pub fn new(db: DatabaseConnection, notifier: Arc<dyn Notifier>, policy: TransitionPolicy) -> Self {
        Self {
            db,
            notifier,
            policy,
        }
    }

    /// Context whose notifications are persisted to the same database.
    pub fn with_stored_notifier(db: DatabaseConnection, policy: TransitionPolicy) -> Self {
        let notifier = Arc::new(StoredNotifier::new(db.clone()));
        Self::new(db, notifier, policy)
    }

    #[inline]
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    #[inline]
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Delivers notices after the originating transaction committed.
    ///
    /// Failures are logged and dropped; they never undo the committed change.
    pub(crate) async fn dispatch(&self, notices: Vec<Notice>) {
        for notice in notices {
            let user_id = notice.user_id;
            let kind = notice.notification_type;
            if let Err(e) = self.notifier.notify(notice).await {
                warn!(user_id, %kind, error = %e, "Failed to deliver notification");
            }
        }
    }
}
