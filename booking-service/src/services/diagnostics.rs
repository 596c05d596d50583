//! Connectivity probe behind `GET /test`.

use crate::config::DatabaseConfig;
use crate::dtos::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingStatus,
};
use crate::services::DocumentStore;
use service_core::error::AppError;

/// Most collection names reported by the probe.
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Longest error text reported by the probe, in characters.
pub const MAX_ERROR_CHARS: usize = 120;

pub fn truncate_error(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Probe the store and describe backend and database state.
///
/// Setting presence is reported from `settings` regardless of the probe
/// outcome.
pub async fn probe_database(
    store: &dyn DocumentStore,
    settings: &DatabaseConfig,
) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: BackendStatus::Running,
        database: DatabaseStatus::Unavailable,
        message: String::new(),
        error: None,
        database_url: SettingStatus::of(settings.url.as_deref()),
        database_name: SettingStatus::of(settings.name.as_deref()),
        connection_status: ConnectionStatus::NotConnected,
        collections: Vec::new(),
    };

    if !store.is_connected() {
        report.database = DatabaseStatus::Unavailable;
        report.message = report.database.label().to_string();
        return report;
    }

    match store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_REPORTED_COLLECTIONS);
            report.collections = names;
            report.connection_status = ConnectionStatus::Connected;
            report.database = DatabaseStatus::ConnectedAndWorking;
            report.message = report.database.label().to_string();
        }
        Err(e) => {
            report.database = match e {
                AppError::DatabaseError(_) => DatabaseStatus::ConnectedWithError,
                _ => DatabaseStatus::Error,
            };
            let error = truncate_error(&e.to_string());
            report.message = format!("{}: {}", report.database.label(), error);
            report.error = Some(error);
        }
    }

    tracing::debug!(database = ?report.database, "Database probe finished");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UnavailableStore;

    #[test]
    fn truncates_on_character_boundaries() {
        let message = "é".repeat(200);
        let truncated = truncate_error(&message);
        assert_eq!(truncated.chars().count(), MAX_ERROR_CHARS);

        assert_eq!(truncate_error("short"), "short");
    }

    #[tokio::test]
    async fn unconfigured_store_is_unavailable() {
        let report = probe_database(&UnavailableStore, &DatabaseConfig::default()).await;

        assert_eq!(report.backend, BackendStatus::Running);
        assert_eq!(report.database, DatabaseStatus::Unavailable);
        assert_eq!(report.database_url, SettingStatus::NotSet);
        assert_eq!(report.database_name, SettingStatus::NotSet);
        assert_eq!(report.connection_status, ConnectionStatus::NotConnected);
        assert!(report.collections.is_empty());
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn configured_store_without_handle_is_unavailable() {
        let settings = DatabaseConfig {
            url: Some("mongodb://db:27017".to_string()),
            name: Some("bookings".to_string()),
        };
        let report = probe_database(&UnavailableStore, &settings).await;

        assert_eq!(report.database, DatabaseStatus::Unavailable);
        assert_eq!(report.connection_status, ConnectionStatus::NotConnected);
        assert_eq!(report.database_url, SettingStatus::Set);
        assert_eq!(report.database_name, SettingStatus::Set);
    }
}
