use roster::PlayerPositionType;

pub const BANNER: &str = "=== NFL FOOTBALL TEAM MANAGEMENT SYSTEM ===";
pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";
pub const GOODBYE_MESSAGE: &str = "Exiting program. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    AddPlayer,
    AddOneOfEach,
    ShowRoster,
    ShowCount,
    Exit,
}

impl MainMenuChoice {
    pub fn from_number(val: i32) -> Option<MainMenuChoice> {
        match val {
            1 => Some(MainMenuChoice::AddPlayer),
            2 => Some(MainMenuChoice::AddOneOfEach),
            3 => Some(MainMenuChoice::ShowRoster),
            4 => Some(MainMenuChoice::ShowCount),
            5 => Some(MainMenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn main_menu() -> String {
    [
        "",
        "========== MAIN MENU ==========",
        "1. Add a player (choose position)",
        "2. Add one player from EACH position",
        "3. Show team roster",
        "4. Show number of players on team",
        "5. Exit",
        "===============================",
    ]
    .join("\n")
}

/// Numbered list of every position, as offered by "Add a player".
pub fn position_menu() -> String {
    PlayerPositionType::ALL
        .iter()
        .map(|position| format!("{}. {}", position.menu_number(), position.label()))
        .collect::<Vec<_>>()
        .join("\n")
}
