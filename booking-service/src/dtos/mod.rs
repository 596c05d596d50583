pub mod bookings;
pub mod diagnostics;

pub use bookings::{booking_to_json, CreateBookingResponse};
pub use diagnostics::{
    BackendStatus, ConnectionStatus, DatabaseStatus, DiagnosticsReport, SettingStatus,
};
