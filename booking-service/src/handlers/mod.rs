pub mod bookings;
pub mod diagnostics;
pub mod health;
pub mod metrics;

pub use bookings::{create_booking, list_bookings};
pub use diagnostics::test_database;
pub use health::{health_check, hello, root};
pub use metrics::metrics_endpoint;
