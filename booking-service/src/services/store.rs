//! Document store access.
//!
//! Handlers only see the [`DocumentStore`] trait. At startup exactly one
//! implementation is chosen: [`MongoStore`] when the store settings are present
//! and a client could be built, [`UnavailableStore`] otherwise.

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, DateTime as BsonDateTime, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use service_core::error::AppError;
use std::sync::Arc;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection`, stamping `created_at` and
    /// `updated_at`, and return the identifier assigned by the store.
    async fn create_document(&self, collection: &str, document: Document)
        -> Result<String, AppError>;

    /// Fetch up to `limit` documents (all when `None`) in the store's
    /// natural order.
    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError>;

    /// Whether a live store handle exists.
    fn is_connected(&self) -> bool;
}

/// Set `created_at` and `updated_at` to the current UTC time.
pub fn stamp_timestamps(document: &mut Document) {
    let now = BsonDateTime::now();
    document.insert("created_at", now);
    document.insert("updated_at", now);
}

/// Query options for a listing capped at `limit` documents.
pub fn find_options(limit: Option<i64>) -> FindOptions {
    FindOptions::builder().limit(limit).build()
}

/// Render a store identifier as text. ObjectIds become their hex form.
pub fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client created");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create_document(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, AppError> {
        stamp_timestamps(&mut document);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        Ok(bson_id_to_string(&result.inserted_id))
    }

    async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {

        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(doc! {}, find_options(limit))
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to collect documents: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        self.db.list_collection_names(None).await.map_err(|e| {
            tracing::warn!("Failed to list collections: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })
    }

    fn is_connected(&self) -> bool {
        true
    }
}

/// Stand-in used when no store connection could be made at startup. Every
/// data operation fails with [`AppError::StoreUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore;

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn create_document(&self, _: &str, _: Document) -> Result<String, AppError> {
        Err(AppError::StoreUnavailable)
    }

    async fn get_documents(
        &self,
        _: &str,
        _: Option<i64>,
    ) -> Result<Vec<Document>, AppError> {
        Err(AppError::StoreUnavailable)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, AppError> {
        Err(AppError::StoreUnavailable)
    }

    fn is_connected(&self) -> bool {
        false
    }
}

/// Pick the store implementation for this process.
///
/// A failed ping does not demote the live store: the driver reconnects on
/// demand and `/test` reports the failure.
pub async fn connect_store(settings: &DatabaseConfig) -> Arc<dyn DocumentStore> {
    let (Some(url), Some(name)) = (settings.url.as_deref(), settings.name.as_deref()) else {
        tracing::warn!("DATABASE_URL or DATABASE_NAME not set, booking storage is unavailable");
        return Arc::new(UnavailableStore);
    };

    match MongoStore::connect(url, name).await {
        Ok(store) => {
            if let Err(e) = store.health_check().await {
                tracing::warn!("MongoDB is not reachable yet: {}", e);
            }
            Arc::new(store)
        }
        Err(e) => {
            tracing::error!("Falling back to unavailable store: {}", e);
            Arc::new(UnavailableStore)
        }
    }
}
