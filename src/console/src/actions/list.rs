use crate::{ConsoleResult, Terminal};
use log::debug;
use roster::Roster;
use std::io::{BufRead, Write};

pub const NO_PLAYERS_MESSAGE: &str = "No players on the team yet.";

const RULE: &str = "========================================";

pub fn show_roster<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    roster: &Roster,
) -> ConsoleResult<()> {
    if roster.is_empty() {
        terminal.write_line(&format!("\n{}", NO_PLAYERS_MESSAGE))?;
        return Ok(());
    }

    debug!("show roster: {} players", roster.count());

    terminal.write_line("\n=== TEAM ROSTER ===")?;
    terminal.write_line(&format!("Total players: {}", roster.count()))?;
    terminal.write_line(RULE)?;

    for line in roster.listing() {
        terminal.write_line(&line)?;
    }

    terminal.write_line(RULE)?;

    Ok(())
}
