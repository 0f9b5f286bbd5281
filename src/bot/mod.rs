/// Administrator checks
pub mod auth;
/// Text commands and their execution
pub mod commands;
/// Shared handler state
pub mod context;
/// Update routing and teloxide endpoints
pub mod handlers;
/// Outbound chat operations
pub mod transport;
