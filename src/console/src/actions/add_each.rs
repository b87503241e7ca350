use crate::{ConsoleResult, Terminal};
use log::debug;
use roster::{Player, PlayerPositionType, Roster, POSITIONS_COUNT};
use std::io::{BufRead, Write};

/// Walks every position in menu order and signs one player for each.
///
/// Each player is added as soon as their number is read, so a session that
/// ends halfway keeps the players entered so far.
pub fn add_one_of_each<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    roster: &mut Roster,
) -> ConsoleResult<()> {
    terminal.write_line("\n=== ADD ONE PLAYER FROM EACH POSITION ===")?;
    terminal.write_line("Please enter information for each position:\n")?;

    let mut current_group = None;

    for position in PlayerPositionType::ALL {
        let group = position.group();

        if current_group != Some(group) {
            if current_group.is_some() {
                terminal.write_line("")?;
            }
            terminal.write_line(&format!("--- {} ---", group.label()))?;
            current_group = Some(group);
        } else {
            terminal.write_line("")?;
        }

        terminal.write_line(&format!("{}:", position.label()))?;

        let name = terminal.prompt_line("  Name: ")?;
        let number = terminal.prompt_number("  Number: ")?;

        roster.add(Player::new(name, number, position));
    }

    debug!("filled {} positions, roster size: {}", POSITIONS_COUNT, roster.count());

    terminal.write_line(&format!(
        "\n✅ All {} positions filled! Team now has {} players.",
        POSITIONS_COUNT,
        roster.count()
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConsoleError;
    use crate::testing::{scripted, transcript};

    fn full_script() -> String {
        (1..=12)
            .map(|idx| format!("Player {}\n{}\n", idx, idx * 10))
            .collect()
    }

    #[test]
    fn test_appends_twelve_in_order() {
        let mut roster = Roster::new();
        let mut terminal = scripted(&full_script());

        add_one_of_each(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 12);
        for (idx, position) in PlayerPositionType::ALL.iter().enumerate() {
            assert_eq!(roster[idx].position, *position);
            assert_eq!(roster[idx].name, format!("Player {}", idx + 1));
            assert_eq!(roster[idx].number, (idx as i32 + 1) * 10);
        }
    }

    #[test]
    fn test_same_names_still_fill_every_position() {
        let mut roster = Roster::new();
        roster.add(Player::new("Veteran", 99, PlayerPositionType::Quarterback));
        let script: String = (0..12).map(|_| "\n0\n").collect();
        let mut terminal = scripted(&script);

        add_one_of_each(&mut terminal, &mut roster).unwrap();

        assert_eq!(roster.count(), 13);
        assert_eq!(roster.by_position(PlayerPositionType::Quarterback).len(), 2);
        assert_eq!(roster.by_position(PlayerPositionType::Returner).len(), 1);
        assert!(transcript(terminal).ends_with("\n✅ All 12 positions filled! Team now has 13 players.\n"));
    }

    #[test]
    fn test_group_headers_in_order() {
        let mut roster = Roster::new();
        let mut terminal = scripted(&full_script());

        add_one_of_each(&mut terminal, &mut roster).unwrap();

        let output = transcript(terminal);
        let offense = output.find("--- OFFENSE ---").unwrap();
        let defense = output.find("--- DEFENSE ---").unwrap();
        let special = output.find("--- SPECIAL TEAMS ---").unwrap();

        assert!(offense < output.find("Quarterback:").unwrap());
        assert!(output.find("Offensive Lineman:").unwrap() < defense);
        assert!(defense < output.find("Defensive Lineman:").unwrap());
        assert!(output.find("Defensive Back:").unwrap() < special);
        assert!(special < output.find("Kicker:").unwrap());
    }

    #[test]
    fn test_input_ends_midway() {
        let mut roster = Roster::new();
        let mut terminal = scripted("Joe\n12\nJerry\n");

        let result = add_one_of_each(&mut terminal, &mut roster);

        assert!(matches!(result, Err(ConsoleError::InputClosed)));
        assert_eq!(roster.count(), 1);
    }
}
