pub mod booking;

pub use booking::{Booking, BOOKING_COLLECTION};
