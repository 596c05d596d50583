use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendStatus {
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatabaseStatus {
    /// No live store handle exists.
    Unavailable,
    ConnectedAndWorking,
    /// A live handle exists but the driver failed the probe.
    ConnectedWithError,
    /// The probe failed for a reason other than a driver error.
    Error,
}

impl DatabaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            DatabaseStatus::Unavailable => "Not Available",
            DatabaseStatus::ConnectedAndWorking => "Connected & Working",
            DatabaseStatus::ConnectedWithError => "Connected but Error",
            DatabaseStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingStatus {
    #[serde(rename = "set")]
    Set,
    #[serde(rename = "not set")]
    NotSet,
}

impl SettingStatus {
    pub fn of(value: Option<&str>) -> Self {
        if value.is_some() {
            SettingStatus::Set
        } else {
            SettingStatus::NotSet
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionStatus {
    #[serde(rename = "connected")]
    Connected,
    #[serde(rename = "not connected")]
    NotConnected,
}

/// Body of `GET /test`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsReport {
    pub backend: BackendStatus,
    pub database: DatabaseStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub database_url: SettingStatus,
    pub database_name: SettingStatus,
    pub connection_status: ConnectionStatus,
    pub collections: Vec<String>,
}
