use mongodb::bson::{self, Document};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

/// Collection holding booking requests.
pub const BOOKING_COLLECTION: &str = "booking";

/// A booking request as submitted by a client.
///
/// Fields beyond these are accepted and ignored. Server-side metadata (`_id`,
/// `created_at`, `updated_at`) is added by the document store on insert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Booking {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Date is required"))]
    pub date: String,

    #[validate(length(min = 1, message = "Service is required"))]
    pub service: String,
}

impl Booking {
    pub fn to_document(&self) -> Result<Document, AppError> {
        Ok(bson::to_document(self)?)
    }
}
