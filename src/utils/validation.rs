use crate::error::RaffleError;

pub const MAX_PRIZE_LENGTH: usize = 200;

/// Trims and checks a prize name. Returns the text to store.
pub fn validate_prize(prize: &str) -> Result<String, RaffleError> {
    let prize = prize.trim();

    if prize.is_empty() {
        return Err(RaffleError::InvalidInput("Prize name cannot be empty".to_string()));
    }

    if prize.chars().count() > MAX_PRIZE_LENGTH {
        return Err(RaffleError::InvalidInput(format!(
            "Prize name cannot be longer than {MAX_PRIZE_LENGTH} characters"
        )));
    }

    if prize.contains('\n') || prize.contains('\r') {
        return Err(RaffleError::InvalidInput("Prize name cannot contain line breaks".to_string()));
    }

    Ok(prize.to_string())
}
