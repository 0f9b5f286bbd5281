use tokio::sync::Mutex;

use crate::database::{connection::DatabaseManager, models::*};
use crate::error::RaffleError;
use crate::services::draw::select_winner;
use crate::utils::logging::log_database_operation;
use crate::utils::validation::validate_prize;

/// Result of a member pressing the join button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// Newly entered; the live message needs a refresh.
    Joined,
    AlreadyJoined,
    /// Entries are closed; nothing was written.
    Closed,
}

impl JoinOutcome {
    pub fn admitted(&self) -> bool {
        matches!(self, JoinOutcome::Joined)
    }
}

/// What a join did, together with the record as written under the lock.
/// Refreshing from this record, rather than re-reading, keeps a later
/// `stop` from being rendered as still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinResult {
    pub outcome: JoinOutcome,
    pub record: RaffleRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    pub prize: String,
    pub winner: String,
    pub total_participants: usize,
}

/// Transition rules for the single raffle.
///
/// Every read-modify-write of the stored record happens while holding
/// `write_lock`, so two joins arriving together cannot drop one another.
pub struct RaffleService {
    db: DatabaseManager,
    write_lock: Mutex<()>,
}

impl RaffleService {
    pub fn new(db: DatabaseManager) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn current(&self) -> Result<RaffleRecord, RaffleError> {
        Ok(RaffleRecord::read(&self.db.pool).await?)
    }

    /// Opens a new raffle for `prize`, discarding all previous entrants.
    pub async fn start_raffle(&self, prize: &str) -> Result<RaffleRecord, RaffleError> {
        let prize = validate_prize(prize)?;

        let _guard = self.write_lock.lock().await;
        let record = RaffleRecord::replace(
            &self.db.pool,
            RaffleUpdate {
                prize: Some(prize),
                status: Some(RaffleStatus::Active),
                participants: Some(Vec::new()),
            },
        )
        .await?;
        log_database_operation("UPDATE", "raffle", Some("raffle started"));
        Ok(record)
    }

    /// Closes entries. Entrants are kept for the draw.
    pub async fn stop_raffle(&self) -> Result<RaffleRecord, RaffleError> {
        let _guard = self.write_lock.lock().await;
        let record = RaffleRecord::replace(
            &self.db.pool,
            RaffleUpdate {
                status: Some(RaffleStatus::Inactive),
                ..Default::default()
            },
        )
        .await?;
        log_database_operation("UPDATE", "raffle", Some("raffle stopped"));
        Ok(record)
    }

    pub async fn join(&self, participant_id: &str) -> Result<JoinResult, RaffleError> {
        let _guard = self.write_lock.lock().await;
        let mut record = RaffleRecord::read(&self.db.pool).await?;

        if !record.is_active() {
            return Ok(JoinResult { outcome: JoinOutcome::Closed, record });
        }
        if record.participants.iter().any(|p| p == participant_id) {
            return Ok(JoinResult { outcome: JoinOutcome::AlreadyJoined, record });
        }

        record.participants.push(participant_id.to_string());
        let record = RaffleRecord::replace(
            &self.db.pool,
            RaffleUpdate {
                participants: Some(record.participants),
                ..Default::default()
            },
        )
        .await?;
        log_database_operation("UPDATE", "raffle", Some(&format!("entrant {participant_id} added")));
        Ok(JoinResult { outcome: JoinOutcome::Joined, record })
    }

    /// Picks a winner and closes the raffle. Used for both the first draw and
    /// every redraw; entrants are never removed.
    pub async fn draw(&self) -> Result<DrawOutcome, RaffleError> {
        let _guard = self.write_lock.lock().await;
        let record = RaffleRecord::read(&self.db.pool).await?;

        let winner = select_winner(&record.participants)?.to_string();

        if record.is_active() {
            RaffleRecord::replace(
                &self.db.pool,
                RaffleUpdate {
                    status: Some(RaffleStatus::Inactive),
                    ..Default::default()
                },
            )
            .await?;
            log_database_operation("UPDATE", "raffle", Some("closed by draw"));
        }

        Ok(DrawOutcome {
            prize: record.prize,
            winner,
            total_participants: record.participants.len(),
        })
    }
}
