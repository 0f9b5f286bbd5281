/// Random winner selection
pub mod draw;
/// HTTP health endpoints
pub mod health;
/// The live scoreboard message
pub mod live_message;
/// Raffle state transitions
pub mod raffle;
