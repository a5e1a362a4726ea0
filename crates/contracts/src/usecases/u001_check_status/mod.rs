//! GET /status

pub mod response;

pub use response::StatusSnapshot;
