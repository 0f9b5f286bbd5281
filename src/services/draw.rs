use crate::error::RaffleError;

/// Picks a uniformly random entrant using the process-wide generator.
///
/// The input is never modified and no memory of earlier winners is kept, so
/// calling this again may return the same entrant.
pub fn select_winner(participants: &[String]) -> Result<&str, RaffleError> {
    select_winner_with(&mut fastrand::Rng::new(), participants)
}

/// Same as [`select_winner`] with a caller-supplied generator.
pub fn select_winner_with<'a>(
    rng: &mut fastrand::Rng,
    participants: &'a [String],
) -> Result<&'a str, RaffleError> {
    if participants.is_empty() {
        return Err(RaffleError::EmptyParticipants);
    }

    let index = rng.usize(..participants.len());
    Ok(participants[index].as_str())
}
