pub mod booking;

pub use booking::{Booking, BookingStatus, NewBooking, ServiceType};
