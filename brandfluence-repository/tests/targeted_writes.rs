use brandfluence_error::storage::StorageError;
use brandfluence_repository::{CampaignRepository, ContentRepository, TaskRepository};

#[tokio::test]
async fn test_writes_to_missing_rows_report_not_found() {
    let db = brandfluence_storage::init_memory_db().await.unwrap();

    assert!(matches!(
        CampaignRepository::assign_influencer(404, 1, &db).await,
        Err(StorageError::EntityNotFound(e)) if e == "campaign"
    ));
    assert!(matches!(
        CampaignRepository::increment_view_count(404, &db).await,
        Err(StorageError::EntityNotFound(_))
    ));
    assert!(matches!(
        CampaignRepository::delete(404, &db).await,
        Err(StorageError::EntityNotFound(_))
    ));
    assert!(matches!(
        TaskRepository::delete(404, &db).await,
        Err(StorageError::EntityNotFound(e)) if e == "task"
    ));
    assert!(matches!(
        ContentRepository::delete(404, &db).await,
        Err(StorageError::EntityNotFound(e)) if e == "content"
    ));
}
