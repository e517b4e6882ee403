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

pub use brand::BrandRepository;
pub use campaign::{CampaignRepository, CampaignScope};
pub use content::ContentRepository;
pub use deal_application::DealApplicationRepository;
pub use influencer::InfluencerRepository;
pub use message::MessageRepository;
pub use milestone::MilestoneRepository;
pub use notification::NotificationRepository;
pub use payment::PaymentRepository;
pub use task::{TaskFilter, TaskRepository};
pub use user::UserRepository;

use brandfluence_error::{storage::StorageError, StorageResult};
use brandfluence_models::domain::prelude::{PageParams, PageResult};
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, Select,
};

/// Runs `query` as one page: total count first, then the requested slice.
pub(crate) async fn fetch_page<'db, C, E>(
    query: Select<E>,
    params: PageParams,
    db: &'db C,
) -> StorageResult<PageResult<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync + 'db,
{
    let params = params.normalized();
    let (page, page_size) = (params.page, params.page_size);
    let total = query.clone().count(db).await?;
    let records = query
        .paginate(db, page_size as u64)
        .fetch_page((page - 1) as u64)
        .await?;

    Ok(PageResult {
        records,
        total,
        pages: ((total as f64) / (page_size as f64)).ceil() as u32,
        page,
        page_size,
    })
}

/// Case-insensitive literal substring match on a text column.
///
/// `%`, `_` and `\` in the needle match themselves.
pub(crate) fn icontains<T: ColumnTrait>(col: T, needle: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// A write aimed at one row by id must have hit it.
pub(crate) fn expect_one(rows_affected: u64, entity: &str) -> StorageResult<()> {
    if rows_affected == 0 {
        Err(StorageError::EntityNotFound(entity.to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("beauty"), "beauty");
        assert_eq!(escape_like("100%_real"), "100\\%\\_real");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_expect_one() {
        assert!(expect_one(1, "task").is_ok());
        assert!(matches!(
            expect_one(0, "task"),
            Err(StorageError::EntityNotFound(e)) if e == "task"
        ));
    }
}
