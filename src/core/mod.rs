pub mod cache;
pub mod interfaces;
pub mod models;
pub mod orchestrators;
