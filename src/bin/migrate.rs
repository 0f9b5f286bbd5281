use anyhow::{anyhow, Result};
use raffle_bot::config::database_url_from_env;
use raffle_bot::database::connection::{sqlite_file_path, DatabaseManager};
use raffle_bot::database::models::RaffleRecord;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Up,
    Check,
    Reset,
    Help,
}

impl Action {
    fn parse(arg: Option<&str>) -> Option<Self> {
        match arg.unwrap_or("up") {
            "migrate" | "up" => Some(Action::Up),
            "check" => Some(Action::Check),
            "reset" => Some(Action::Reset),
            "help" | "--help" | "-h" => Some(Action::Help),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let arg = std::env::args().nth(1);
    let Some(action) = Action::parse(arg.as_deref()) else {
        eprintln!("Unknown command: {}", arg.unwrap_or_default());
        print_help();
        std::process::exit(2);
    };

    if action == Action::Help {
        print_help();
        return Ok(());
    }

    let database_url = database_url_from_env();
    println!("🎟️ raffle-bot database: {}", display_target(&database_url));

    match action {
        Action::Up => migrate(&database_url).await,
        Action::Check => check(&database_url).await,
        Action::Reset => reset(&database_url).await,
        Action::Help => Ok(()),
    }
}

async fn migrate(database_url: &str) -> Result<()> {
    let db = DatabaseManager::new(database_url)
        .await
        .map_err(|e| anyhow!("Failed to open database: {}", e))?;
    db.run_migrations().await?;
    println!("✅ Schema is up to date");
    Ok(())
}

async fn check(database_url: &str) -> Result<()> {
    let db = DatabaseManager::new(database_url)
        .await
        .map_err(|e| anyhow!("Failed to open database: {}", e))?;

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&db.pool)
    .await?;

    if !tables.iter().any(|t| t == "raffle") {
        println!("⚠️  No raffle table yet; run `migrate up` first");
        return Ok(());
    }
    println!("📋 Tables: {}", tables.join(", "));

    let record = RaffleRecord::read(&db.pool).await?;
    println!(
        "🎁 {} | {} | {} participant(s)",
        record.prize,
        record.status,
        record.participant_count()
    );
    Ok(())
}

async fn reset(database_url: &str) -> Result<()> {
    println!("⚠️  This deletes the raffle, its prize and every participant. Type 'yes' to continue:");

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    if !answer.trim().eq_ignore_ascii_case("yes") {
        println!("Reset cancelled");
        return Ok(());
    }

    if DatabaseManager::drop_database(database_url).await? {
        println!("🗑️  Database file removed");
    } else {
        println!("No database file found; creating a fresh one");
    }

    migrate(database_url).await
}

/// Only the file name of a SQLite path is printed.
fn display_target(database_url: &str) -> String {
    sqlite_file_path(database_url)
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| format!("sqlite:.../{}", name.to_string_lossy()))
        .unwrap_or_else(|| database_url.to_string())
}

fn print_help() {
    println!("migrate [up|check|reset|help]");
    println!();
    println!("  up, migrate   apply pending migrations (default)");
    println!("  check         list tables and show the current raffle");
    println!("  reset         delete the SQLite file and recreate the schema");
    println!("  help          show this text");
    println!();
    println!("DATABASE_URL selects the database (default sqlite:./data/raffle.db).");
}
