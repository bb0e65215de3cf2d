//! Adapters that build a taxonomy from external schema sources.

mod schema_dir;

pub use schema_dir::SchemaDirectory;
