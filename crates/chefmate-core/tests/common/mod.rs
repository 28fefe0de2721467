use chefmate_core::CompanionBuilder;
use tempfile::TempDir;

/// Helper function to create a test companion
pub async fn create_test_companion() -> (TempDir, chefmate_core::Companion) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let companion = CompanionBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create companion");
    (temp_dir, companion)
}
