//! Common test utilities.

use axum::Router;

use rosterd::audit::AuditLog;
use rosterd::server::{self, AppState};
use rosterd::store::StudentStore;

/// Create a test `AppState` writing audit lines to a throwaway file.
pub async fn test_app_state() -> AppState {
    use tempfile::TempDir;

    let tmp = TempDir::new().unwrap();

    // Leak the TempDir so it doesn't get cleaned up during the test.
    // This is fine for tests - the OS will clean up on process exit.
    let tmp = Box::leak(Box::new(tmp));
    let audit = AuditLog::open(tmp.path().join("student.log")).await.unwrap();

    AppState {
        students: StudentStore::new(),
        audit,
    }
}

/// Create a test app with empty state.
pub async fn test_app() -> Router {
    let state = test_app_state().await;
    server::build_app(state, 30)
}
