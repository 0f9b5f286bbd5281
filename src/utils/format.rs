//! HTML texts the bot sends to the group.
//!
//! Everything user-supplied (prize names, handles) is escaped before it is
//! embedded, since messages go out with `ParseMode::Html`.

use teloxide::utils::html::{bold, code_inline, escape, italic, link};

use crate::database::models::RaffleRecord;
use crate::services::raffle::DrawOutcome;

pub const JOIN_BUTTON_LABEL: &str = "🎟️ Join the raffle";

pub const SETPRIZE_USAGE: &str = "Usage: /setprize &lt;prize name&gt;";

pub const RAFFLE_STOPPED: &str = "Raffle closed.";

pub const COMMAND_FAILED: &str = "❌ Something went wrong, please try again.";

/// Which announcement a draw produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    First,
    Redraw,
}

/// Renders a participant so the platform notifies them.
///
/// Entrants without a public handle are stored by numeric id; those get a
/// `tg://user` link instead of an `@` mention.
pub fn mention(participant: &str) -> String {
    if !participant.is_empty() && participant.chars().all(|c| c.is_ascii_digit()) {
        link(&format!("tg://user?id={participant}"), participant)
    } else {
        format!("@{}", escape(participant))
    }
}

pub fn render_help() -> String {
    format!(
        "📘 {}\n\n\
        🆘 {} — Show this list of commands.\n\
        📊 {} — Show the current raffle status and number of participants.\n\
        🎁 {} — Start a new raffle for the given prize.\n\
        ⏹️ {} — Close the current raffle to new entries.\n\
        🎯 {} — Draw a random winner among the participants.\n\
        🔁 {} — Draw again among the same participants if the winner did not respond in time.\n\n\
        💡 {}",
        bold("Available commands (administrators only)"),
        bold("/help"),
        bold("/status"),
        bold("/setprize &lt;prize name&gt;"),
        bold("/stop"),
        bold("/draw"),
        bold("/redraw"),
        italic("Group members can only see and join raffles, they cannot use admin commands."),
    )
}

pub fn render_status(record: &RaffleRecord) -> String {
    format!(
        "🎮 Raffle {}\n🏆 Prize: {}\n👥 Participants: {}",
        if record.is_active() { "active" } else { "inactive" },
        escape(&record.prize),
        record.participant_count()
    )
}

/// Text of the scoreboard when it is first posted.
pub fn render_raffle_started(record: &RaffleRecord) -> String {
    format!(
        "🎉 {} 🎉\n\n\
        🏆 {} {}\n\
        👥 {} {}\n\n\
        🔹 Tap the button below to enter!\n\
        ⏳ You can join at any time while the raffle is active.",
        bold("RAFFLE STARTED!"),
        bold("Prize:"),
        code_inline(&record.prize),
        bold("Participants:"),
        code_inline(&record.participant_count().to_string()),
    )
}

/// Text of the scoreboard after an entrant joins.
pub fn render_raffle_active(record: &RaffleRecord) -> String {
    format!(
        "🎮 {}\n\n\
        🏆 {} {}\n\
        👥 {} {}\n\n\
        🔹 Tap {} to enter!",
        bold("RAFFLE ACTIVE!"),
        bold("Prize:"),
        code_inline(&record.prize),
        bold("Participants:"),
        code_inline(&record.participant_count().to_string()),
        bold(&format!("“{JOIN_BUTTON_LABEL}”")),
    )
}

pub fn render_draw(outcome: &DrawOutcome, kind: DrawKind) -> String {
    let (title, winner_label) = match kind {
        DrawKind::First => ("Raffle result!", "Winner"),
        DrawKind::Redraw => ("New draw held!", "New winner"),
    };
    let winner = mention(&outcome.winner);

    format!(
        "{} {}\n\n\
        🎁 Prize: {}\n\
        👑 {}: {}\n\
        👥 Participants: {}\n\n\
        ⏰ {}, you have {} to respond.\n\
        Otherwise the prize will be drawn again! 🔁",
        match kind {
            DrawKind::First => "🏆",
            DrawKind::Redraw => "🔁",
        },
        bold(title),
        bold(&escape(&outcome.prize)),
        winner_label,
        winner,
        bold(&outcome.total_participants.to_string()),
        winner,
        bold("24 hours"),
    )
}

pub fn render_no_participants(kind: DrawKind) -> &'static str {
    match kind {
        DrawKind::First => "❌ There are no participants to draw from.",
        DrawKind::Redraw => "❌ There are no participants to draw from again.",
    }
}
