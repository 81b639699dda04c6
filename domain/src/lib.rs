pub mod booking;
pub mod intent;
pub mod models;
pub mod providers;
pub mod session;
