//! Marketplace Domain Concerns

pub mod bookings;
pub mod properties;
pub mod users;
