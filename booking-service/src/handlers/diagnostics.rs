use crate::dtos::DiagnosticsReport;
use crate::services::probe_database;
use crate::AppState;
use axum::{extract::State, Json};

/// Report backend and document store connectivity. Always 200.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    Json(probe_database(state.store.as_ref(), &state.config.database).await)
}
