//! Test helpers for booking-service integration tests.
//!
//! The application is spawned on a random port with an injected store so the
//! HTTP surface can be exercised without MongoDB.

#![allow(dead_code)]

use async_trait::async_trait;
use booking_service::config::{BookingConfig, DatabaseConfig};
use booking_service::services::{stamp_timestamps, DocumentStore, UnavailableStore};
use booking_service::startup::Application;
use mongodb::bson::{oid::ObjectId, Document};
use service_core::config::Config as CoreConfig;
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Document store backed by a map of collections.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn with_collections(names: &[&str]) -> Self {
        let store = Self::default();
        {
            let mut collections = store.collections.lock().unwrap();
            for name in names {
                collections.insert(name.to_string(), Vec::new());
            }
        }
        store
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        let id = ObjectId::new();
        document.insert("_id", id);
        stamp_timestamps(&mut document);

        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id.to_hex())
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        let limit = limit.map_or(usize::MAX, |l| l as usize);

        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .map(|docs| docs.iter().take(limit).cloned().collect())
            .unwrap_or_default())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        let mut names: Vec<String> = self.collections.lock().unwrap().keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn is_connected(&self) -> bool {
        true
    }
}

/// A connected store whose every operation fails with the given error.
pub struct FailingStore {
    pub driver_error: bool,
    pub message: String,
}

impl FailingStore {
    fn error(&self) -> AppError {
        let err = anyhow::anyhow!(self.message.clone());
        if self.driver_error {
            AppError::DatabaseError(err)
        } else {
            AppError::InternalError(err)
        }
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn create_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(self.error())
    }

    async fn get_documents(
        &self,
        _: &str,
        _: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(self.error())
    }

    fn is_connected(&self) -> bool {
        true
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_with_store(store: Arc<dyn DocumentStore>, database: DatabaseConfig) -> Self {
        let config = BookingConfig {
            common: CoreConfig {
                port: 0,
                ..CoreConfig::default()
            },
            database,
        };

        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped(std::future::pending()).await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    /// Spawn with a working in-memory store.
    pub async fn spawn(store: Arc<InMemoryStore>) -> Self {
        Self::spawn_with_store(store, configured_database()).await
    }

    /// Spawn without any store, as when no settings were provided.
    pub async fn spawn_unavailable() -> Self {
        Self::spawn_with_store(Arc::new(UnavailableStore), DatabaseConfig::default()).await
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_booking(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/bookings", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn configured_database() -> DatabaseConfig {
    DatabaseConfig {
        url: Some("mongodb://localhost:27017".to_string()),
        name: Some("booking_test".to_string()),
    }
}
