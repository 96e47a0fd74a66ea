//! Data models: configuration, the output record, and the field schema.

pub mod config;
pub mod record;
pub mod schema;
