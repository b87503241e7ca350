use crate::{ConsoleResult, Terminal};
use roster::Roster;
use std::io::{BufRead, Write};

pub fn show_count<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    roster: &Roster,
) -> ConsoleResult<()> {
    terminal.write_line("\n=== TEAM SIZE ===")?;
    terminal.write_line(&format!("Number of players on team: {}", roster.count()))?;
    terminal.write_line("=================")?;

    Ok(())
}
