pub mod api;
pub mod attendees;
pub mod bookings;
pub mod cli;
pub mod core;
pub mod hosts;
