pub mod raffle;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Raffle Bot commands (administrators only):")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Show the current raffle status")]
    Status,
    #[command(description = "Start a new raffle for the given prize")]
    SetPrize(String),
    #[command(description = "Close the raffle to new entries")]
    Stop,
    #[command(description = "Draw a winner")]
    Draw,
    #[command(description = "Draw another winner among the same participants")]
    Redraw,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Status => "status",
            Command::SetPrize(_) => "setprize",
            Command::Stop => "stop",
            Command::Draw => "draw",
            Command::Redraw => "redraw",
        }
    }
}
