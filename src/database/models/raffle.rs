use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// Prize label of a freshly initialized store.
pub const DEFAULT_PRIZE: &str = "none set";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RaffleStatus {
    /// Entries are closed (initial and terminal state of every cycle).
    Inactive,
    /// Entries are open.
    Active,
}

impl RaffleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaffleStatus::Inactive => "inactive",
            RaffleStatus::Active => "active",
        }
    }

    /// Anything other than `active` is read back as closed.
    fn from_column(value: &str) -> Self {
        if value == "active" {
            RaffleStatus::Active
        } else {
            RaffleStatus::Inactive
        }
    }
}

impl fmt::Display for RaffleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one and only raffle. The table holds a single row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaffleRecord {
    pub prize: String,
    pub status: RaffleStatus,
    pub participants: Vec<String>,
}

/// Partial update for [`RaffleRecord::replace`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RaffleUpdate {
    pub prize: Option<String>,
    pub status: Option<RaffleStatus>,
    pub participants: Option<Vec<String>>,
}

#[derive(FromRow)]
struct RaffleRow {
    prize: String,
    status: String,
    participants: String,
}

impl From<RaffleRow> for RaffleRecord {
    fn from(row: RaffleRow) -> Self {
        Self {
            prize: row.prize,
            status: RaffleStatus::from_column(&row.status),
            participants: split_participants(&row.participants),
        }
    }
}

impl Default for RaffleRecord {
    fn default() -> Self {
        Self {
            prize: DEFAULT_PRIZE.to_string(),
            status: RaffleStatus::Inactive,
            participants: Vec::new(),
        }
    }
}

impl RaffleRecord {
    pub fn is_active(&self) -> bool {
        self.status == RaffleStatus::Active
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Returns the stored record, inserting the default row on first access.
    pub async fn read(pool: &sqlx::SqlitePool) -> Result<Self, sqlx::Error> {
        let defaults = Self::default();
        sqlx::query(
            r#"
            INSERT INTO raffle (prize, status, participants)
            SELECT ?, ?, ''
            WHERE NOT EXISTS (SELECT 1 FROM raffle)
            "#,
        )
        .bind(&defaults.prize)
        .bind(defaults.status.as_str())
        .execute(pool)
        .await?;

        let row = sqlx::query_as::<_, RaffleRow>(
            "SELECT prize, status, participants FROM raffle LIMIT 1",
        )
        .fetch_one(pool)
        .await?;

        Ok(row.into())
    }

    /// Overwrites the stored row with `update` applied on top of the current one.
    pub async fn replace(
        pool: &sqlx::SqlitePool,
        update: RaffleUpdate,
    ) -> Result<Self, sqlx::Error> {
        let next = Self::read(pool).await?.apply(update);

        sqlx::query("UPDATE raffle SET prize = ?, status = ?, participants = ?")
            .bind(&next.prize)
            .bind(next.status.as_str())
            .bind(join_participants(&next.participants))
            .execute(pool)
            .await?;

        Ok(next)
    }

    pub fn apply(mut self, update: RaffleUpdate) -> Self {
        if let Some(prize) = update.prize {
            self.prize = prize;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(participants) = update.participants {
            self.participants = participants;
        }
        self
    }
}

// Handles cannot contain commas, numeric ids neither.
fn join_participants(participants: &[String]) -> String {
    participants.join(",")
}

fn split_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_keeps_omitted_fields() {
        let record = RaffleRecord {
            prize: "Mug".to_string(),
            status: RaffleStatus::Active,
            participants: vec!["alice".to_string()],
        };

        let updated = record.clone().apply(RaffleUpdate {
            status: Some(RaffleStatus::Inactive),
            ..Default::default()
        });

        assert_eq!(updated.prize, "Mug");
        assert_eq!(updated.status, RaffleStatus::Inactive);
        assert_eq!(updated.participants, record.participants);
    }

    #[test]
    fn test_participant_column_format() {
        let participants = vec!["alice".to_string(), "123456".to_string()];
        let raw = join_participants(&participants);
        assert_eq!(raw, "alice,123456");
        assert_eq!(split_participants(&raw), participants);
        assert!(split_participants("").is_empty());
    }

    #[test]
    fn test_unknown_status_reads_as_inactive() {
        assert_eq!(RaffleStatus::from_column("active"), RaffleStatus::Active);
        assert_eq!(RaffleStatus::from_column("inactive"), RaffleStatus::Inactive);
        assert_eq!(RaffleStatus::from_column("paused"), RaffleStatus::Inactive);
    }
}
