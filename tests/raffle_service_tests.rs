mod common;

use std::sync::Arc;

use anyhow::Result;
use common::setup_test_db;
use raffle_bot::database::models::RaffleStatus;
use raffle_bot::error::RaffleError;
use raffle_bot::services::raffle::{JoinOutcome, RaffleService};

async fn service() -> Result<(RaffleService, tempfile::TempDir)> {
    let (db, temp_dir) = setup_test_db().await?;
    Ok((RaffleService::new(db), temp_dir))
}

#[tokio::test]
async fn test_start_resets_participants_from_any_state() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;

    // From the initial inactive state
    let record = raffles.start_raffle("Mug").await?;
    assert_eq!(record.status, RaffleStatus::Active);
    assert!(record.participants.is_empty());

    // From an active raffle with entrants
    raffles.join("alice").await?;
    let record = raffles.start_raffle("Poster").await?;
    assert_eq!(record.prize, "Poster");
    assert_eq!(record.status, RaffleStatus::Active);
    assert!(record.participants.is_empty());

    // From a stopped raffle with entrants
    raffles.join("bob").await?;
    raffles.stop_raffle().await?;
    let record = raffles.start_raffle("Sticker").await?;
    assert_eq!(record.status, RaffleStatus::Active);
    assert!(record.participants.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_start_rejects_empty_prize() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;

    let result = raffles.start_raffle("   ").await;
    assert!(matches!(result, Err(RaffleError::InvalidInput(_))));

    // Nothing changed
    let record = raffles.current().await?;
    assert_eq!(record.status, RaffleStatus::Inactive);

    Ok(())
}

#[tokio::test]
async fn test_join_deduplicates_in_any_order() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    raffles.start_raffle("Gift Card").await?;

    let calls = ["carol", "alice", "carol", "bob", "alice", "alice", "dave"];
    for id in calls {
        raffles.join(id).await?;
    }

    let record = raffles.current().await?;
    assert_eq!(record.participants, vec!["carol", "alice", "bob", "dave"]);

    Ok(())
}

#[tokio::test]
async fn test_join_outcomes() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    raffles.start_raffle("Gift Card").await?;

    assert_eq!(raffles.join("alice").await?.outcome, JoinOutcome::Joined);
    assert_eq!(raffles.join("alice").await?.outcome, JoinOutcome::AlreadyJoined);
    assert!(JoinOutcome::Joined.admitted());
    assert!(!JoinOutcome::AlreadyJoined.admitted());
    assert!(!JoinOutcome::Closed.admitted());

    Ok(())
}

#[tokio::test]
async fn test_join_returns_the_record_it_wrote() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    raffles.start_raffle("Gift Card").await?;

    let joined = raffles.join("alice").await?;
    assert_eq!(joined.outcome, JoinOutcome::Joined);
    assert_eq!(joined.record.participants, vec!["alice"]);
    assert_eq!(joined.record, raffles.current().await?);

    let again = raffles.join("alice").await?;
    assert_eq!(again.outcome, JoinOutcome::AlreadyJoined);
    assert_eq!(again.record.participants, vec!["alice"]);

    // A closed raffle hands back its inactive state, never an active one
    raffles.stop_raffle().await?;
    let closed = raffles.join("bob").await?;
    assert_eq!(closed.outcome, JoinOutcome::Closed);
    assert_eq!(closed.record.status, RaffleStatus::Inactive);
    assert_eq!(closed.record.participants, vec!["alice"]);

    Ok(())
}

#[tokio::test]
async fn test_join_while_inactive_never_mutates() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;

    // Never started
    assert_eq!(raffles.join("alice").await?.outcome, JoinOutcome::Closed);
    assert!(raffles.current().await?.participants.is_empty());

    // Stopped
    raffles.start_raffle("Gift Card").await?;
    raffles.join("bob").await?;
    raffles.stop_raffle().await?;
    assert_eq!(raffles.join("carol").await?.outcome, JoinOutcome::Closed);
    assert_eq!(raffles.current().await?.participants, vec!["bob"]);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_joins_are_not_lost() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    let raffles = Arc::new(raffles);
    raffles.start_raffle("Gift Card").await?;

    let mut tasks = Vec::new();
    for i in 0..20 {
        let raffles = raffles.clone();
        tasks.push(tokio::spawn(async move { raffles.join(&format!("user{i}")).await }));
    }
    for task in tasks {
        assert_eq!(task.await??.outcome, JoinOutcome::Joined);
    }

    assert_eq!(raffles.current().await?.participant_count(), 20);

    Ok(())
}

#[tokio::test]
async fn test_gift_card_scenario() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;

    let record = raffles.start_raffle("Gift Card").await?;
    assert_eq!(record.status, RaffleStatus::Active);
    assert!(record.participants.is_empty());

    for user in ["alice", "bob", "carol"] {
        raffles.join(user).await?;
    }
    let record = raffles.current().await?;
    assert_eq!(record.participant_count(), 3);

    let record = raffles.stop_raffle().await?;
    assert_eq!(record.status, RaffleStatus::Inactive);
    assert_eq!(record.participant_count(), 3);

    let outcome = raffles.draw().await?;
    assert!(["alice", "bob", "carol"].contains(&outcome.winner.as_str()));
    assert_eq!(outcome.prize, "Gift Card");
    assert_eq!(outcome.total_participants, 3);

    let record = raffles.current().await?;
    assert_eq!(record.status, RaffleStatus::Inactive);
    assert_eq!(record.participant_count(), 3);

    Ok(())
}

#[tokio::test]
async fn test_draw_closes_an_active_raffle() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    raffles.start_raffle("Gift Card").await?;
    raffles.join("alice").await?;

    let outcome = raffles.draw().await?;
    assert_eq!(outcome.winner, "alice");
    assert_eq!(raffles.current().await?.status, RaffleStatus::Inactive);

    // Redraw keeps everything as it is
    let again = raffles.draw().await?;
    assert_eq!(again.winner, "alice");
    let record = raffles.current().await?;
    assert_eq!(record.status, RaffleStatus::Inactive);
    assert_eq!(record.participants, vec!["alice"]);

    Ok(())
}

#[tokio::test]
async fn test_draw_with_no_participants() -> Result<()> {
    let (raffles, _temp_dir) = service().await?;
    raffles.start_raffle("Gift Card").await?;

    let result = raffles.draw().await;
    assert!(matches!(result, Err(RaffleError::EmptyParticipants)));

    // Still open, still empty
    let record = raffles.current().await?;
    assert_eq!(record.status, RaffleStatus::Active);
    assert!(record.participants.is_empty());

    Ok(())
}
