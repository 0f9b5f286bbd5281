/// HTML renderings of raffle messages
pub mod format;
/// Consistent log line helpers
pub mod logging;
/// Input checks for command arguments
pub mod validation;
