pub mod details;
