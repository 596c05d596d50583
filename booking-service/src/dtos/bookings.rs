use crate::services::bson_id_to_string;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const BOOKING_CREATED_MESSAGE: &str = "Booking requested successfully";

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: String,
    pub message: String,
}

impl CreateBookingResponse {
    pub fn new(id: String) -> Self {
        Self {
            id,
            message: BOOKING_CREATED_MESSAGE.to_string(),
        }
    }
}

const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Shape a stored booking for the API: `_id` becomes a string `id`, stored
/// timestamps become RFC 3339 strings, everything else is passed through as
/// relaxed extended JSON.
pub fn booking_to_json(mut document: Document) -> Value {
    let id = document.remove("_id");
    let mut object = Map::new();

    for (key, value) in document {
        let value = match value {
            Bson::DateTime(dt) if TIMESTAMP_FIELDS.contains(&key.as_str()) => {
                Value::String(dt.to_chrono().to_rfc3339())
            }
            other => other.into_relaxed_extjson(),
        };
        object.insert(key, value);
    }

    if let Some(id) = id.filter(|id| !matches!(id, Bson::Null)) {
        object.insert("id".to_string(), Value::String(bson_id_to_string(&id)));
    }

    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};

    #[test]
    fn renames_id_and_formats_timestamps() {
        let oid = ObjectId::new();
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap();
        let doc = doc! {
            "_id": oid,
            "name": "Ann",
            "created_at": BsonDateTime::from_chrono(created),
            "updated_at": BsonDateTime::from_chrono(created),
        };

        let json = booking_to_json(doc);

        assert_eq!(json["id"], oid.to_hex());
        assert!(json.get("_id").is_none());
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["created_at"], "2024-01-01T10:30:00+00:00");
        assert_eq!(json["updated_at"], "2024-01-01T10:30:00+00:00");
    }

    #[test]
    fn leaves_other_fields_untouched() {
        let doc = doc! {
            "_id": "custom-id",
            "created_at": "yesterday",
            "guests": 3,
            "tags": ["bridal", "trial"],
        };

        let json = booking_to_json(doc);

        assert_eq!(json["id"], "custom-id");
        assert_eq!(json["created_at"], "yesterday");
        assert_eq!(json["guests"], 3);
        assert_eq!(json["tags"], serde_json::json!(["bridal", "trial"]));
    }

    #[test]
    fn stored_id_wins_over_client_id_field() {
        let oid = ObjectId::new();
        let json = booking_to_json(doc! { "_id": oid, "id": "spoofed" });
        assert_eq!(json["id"], oid.to_hex());
    }
}
