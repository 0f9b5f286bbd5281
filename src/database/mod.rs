/// SQLite pool setup and migrations
pub mod connection;
/// Persisted records
pub mod models;
