use crate::menu::position_menu;
use crate::{ConsoleResult, Terminal};
use log::debug;
use roster::{Player, PlayerPositionType, Roster};
use std::io::{BufRead, Write};

pub const INVALID_POSITION_MESSAGE: &str = "Invalid position number!";

/// Asks for a position, then a name and number, and signs the player.
/// An unknown position is rejected before any further prompt.
pub fn add_player<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    roster: &mut Roster,
) -> ConsoleResult<()> {
    terminal.write_line("\n=== ADD PLAYER ===")?;
    terminal.write_line("Select position:")?;
    terminal.write_line(&position_menu())?;

    let selected = terminal.prompt_number("Enter position number (1-12): ")?;

    let position = match PlayerPositionType::from_menu_number(selected) {
        Some(position) => position,
        None => {
            debug!("rejected position number: {}", selected);
            terminal.write_line(INVALID_POSITION_MESSAGE)?;
            return Ok(());
        }
    };

    let name = terminal.prompt_line("Enter player name: ")?;
    let number = terminal.prompt_number("Enter player number: ")?;

    terminal.write_line(&format!("\n✅ Player added: {} (#{})", name, number))?;

    roster.add(Player::new(name, number, position));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{scripted, transcript};

    #[test]
    fn test_add_valid_position() {
        let mut roster = Roster::new();
        let mut terminal = scripted("1\nJoe\n12\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 1);
        assert_eq!(roster.last(), Some(&Player::new("Joe", 12, PlayerPositionType::Quarterback)));
        assert!(transcript(terminal).ends_with("\n✅ Player added: Joe (#12)\n"));
    }

    #[test]
    fn test_new_player_is_last() {
        let mut roster = Roster::new();
        roster.add(Player::new("Existing", 1, PlayerPositionType::Kicker));
        let mut terminal = scripted("12\nDevin\n-20\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 2);
        assert_eq!(roster.last(), Some(&Player::new("Devin", -20, PlayerPositionType::Returner)));
    }

    #[test]
    fn test_reject_position_zero() {
        let mut roster = Roster::new();
        let mut terminal = scripted("0\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 0);
        let output = transcript(terminal);
        assert!(output.ends_with("Enter position number (1-12): Invalid position number!\n"));
        assert!(!output.contains("Enter player name: "));
    }

    #[test]
    fn test_reject_position_thirteen() {
        let mut roster = Roster::new();
        roster.add(Player::new("Existing", 1, PlayerPositionType::Holder));
        let mut terminal = scripted("13\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 1);
        assert!(transcript(terminal).contains(INVALID_POSITION_MESSAGE));
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let mut roster = Roster::new();
        let mut terminal = scripted("7\n\n55\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster[0], Player::new("", 55, PlayerPositionType::Linebacker));
    }

    #[test]
    fn test_malformed_number_reprompts() {
        let mut roster = Roster::new();
        let mut terminal = scripted("nine\n9\nAdam\nfour\n4\n");

        add_player(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster[0], Player::new("Adam", 4, PlayerPositionType::Kicker));
    }
}
