//! Storage module for record stores and configuration.

pub mod auth;
pub mod config;
pub mod csv_store;
pub mod database;
pub mod schema;
pub mod store;

pub use config::{AppConfig, Backend, ConfigError};
pub use csv_store::CsvStore;
pub use database::SqliteStore;
pub use store::{RecordStore, StoreError, UserDirectory, UserRecord, UserSummary};
