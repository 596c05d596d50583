pub mod diagnostics;
pub mod metrics;
pub mod store;

pub use diagnostics::probe_database;
pub use metrics::{get_metrics, init_metrics, record_booking_created};
pub use store::{
    bson_id_to_string, connect_store, find_options, stamp_timestamps, DocumentStore, MongoStore,
    UnavailableStore,
};
