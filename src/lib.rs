//! # Raffle Bot
//!
//! A Telegram bot that runs one giveaway at a time in a group.
//!
//! ## Features
//! - Administrators open a raffle with `/setprize` and close it with `/stop`
//! - Members enter through a button on a live scoreboard message
//! - `/draw` and `/redraw` pick a random winner among the entrants
//! - Persistent storage with SQLite

/// Bot command handlers, update routing, and the chat transport
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database connection, migrations, and the raffle record
pub mod database;
/// Error types shared across the crate
pub mod error;
/// Raffle rules, winner selection, the live message, and health checks
pub mod services;
/// Formatting, validation, and logging helpers
pub mod utils;
