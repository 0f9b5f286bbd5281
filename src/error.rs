use thiserror::Error;

/// Failures of the raffle core.
#[derive(Debug, Error)]
pub enum RaffleError {
    /// The caller lacks administrator privilege.
    #[error("not authorized")]
    NotAuthorized,

    /// A draw was requested but nobody has entered.
    #[error("there are no participants to draw from")]
    EmptyParticipants,

    /// A required argument was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The SQLite store could not be read or written.
    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// An outbound chat operation (send, edit, delete, role lookup) failed.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The Telegram Bot API call failed or was refused.
    #[error("telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    /// Rejected without a request error, e.g. by a test double.
    #[error("transport rejected the operation: {0}")]
    Rejected(String),
}
