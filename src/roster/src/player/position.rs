use std::fmt::{Display, Formatter, Result};

pub const POSITIONS_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerPositionType {
    // Offense
    Quarterback,
    WideReceiver,
    TightEnd,
    RunningBack,
    OffensiveLineman,
    // Defense
    DefensiveLineman,
    Linebacker,
    DefensiveBack,
    // Special teams
    Kicker,
    Holder,
    Punter,
    Returner,
}

impl PlayerPositionType {
    /// Menu order, which is also the order positions are filled in bulk.
    pub const ALL: [PlayerPositionType; POSITIONS_COUNT] = [
        PlayerPositionType::Quarterback,
        PlayerPositionType::WideReceiver,
        PlayerPositionType::TightEnd,
        PlayerPositionType::RunningBack,
        PlayerPositionType::OffensiveLineman,
        PlayerPositionType::DefensiveLineman,
        PlayerPositionType::Linebacker,
        PlayerPositionType::DefensiveBack,
        PlayerPositionType::Kicker,
        PlayerPositionType::Holder,
        PlayerPositionType::Punter,
        PlayerPositionType::Returner,
    ];

    pub fn from_menu_number(val: i32) -> Option<PlayerPositionType> {
        match val {
            1 => Some(PlayerPositionType::Quarterback),
            2 => Some(PlayerPositionType::WideReceiver),
            3 => Some(PlayerPositionType::TightEnd),
            4 => Some(PlayerPositionType::RunningBack),
            5 => Some(PlayerPositionType::OffensiveLineman),
            6 => Some(PlayerPositionType::DefensiveLineman),
            7 => Some(PlayerPositionType::Linebacker),
            8 => Some(PlayerPositionType::DefensiveBack),
            9 => Some(PlayerPositionType::Kicker),
            10 => Some(PlayerPositionType::Holder),
            11 => Some(PlayerPositionType::Punter),
            12 => Some(PlayerPositionType::Returner),
            _ => None,
        }
    }

    pub fn menu_number(&self) -> u8 {
        match self {
            PlayerPositionType::Quarterback => 1,
            PlayerPositionType::WideReceiver => 2,
            PlayerPositionType::TightEnd => 3,
            PlayerPositionType::RunningBack => 4,
            PlayerPositionType::OffensiveLineman => 5,
            PlayerPositionType::DefensiveLineman => 6,
            PlayerPositionType::Linebacker => 7,
            PlayerPositionType::DefensiveBack => 8,
            PlayerPositionType::Kicker => 9,
            PlayerPositionType::Holder => 10,
            PlayerPositionType::Punter => 11,
            PlayerPositionType::Returner => 12,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerPositionType::Quarterback => "Quarterback",
            PlayerPositionType::WideReceiver => "Wide Receiver",
            PlayerPositionType::TightEnd => "Tight End",
            PlayerPositionType::RunningBack => "Running Back",
            PlayerPositionType::OffensiveLineman => "Offensive Lineman",
            PlayerPositionType::DefensiveLineman => "Defensive Lineman",
            PlayerPositionType::Linebacker => "Linebacker",
            PlayerPositionType::DefensiveBack => "Defensive Back",
            PlayerPositionType::Kicker => "Kicker",
            PlayerPositionType::Holder => "Holder",
            PlayerPositionType::Punter => "Punter",
            PlayerPositionType::Returner => "Returner",
        }
    }

    /// What the position does on the field
    pub fn action_description(&self) -> &'static str {
        match self {
            PlayerPositionType::Quarterback => "Throws passes and directs the offense",
            PlayerPositionType::WideReceiver => "Catches passes and runs routes",
            PlayerPositionType::TightEnd => "Blocks and catches passes",
            PlayerPositionType::RunningBack => "Runs with the ball and blocks",
            PlayerPositionType::OffensiveLineman => "Blocks defensive players",
            PlayerPositionType::DefensiveLineman => "Rushes quarterback and stops runs",
            PlayerPositionType::Linebacker => "Tackles runners and covers receivers",
            PlayerPositionType::DefensiveBack => "Covers receivers and intercepts passes",
            PlayerPositionType::Kicker => "Kicks field goals and extra points",
            PlayerPositionType::Holder => "Holds the ball for field goals",
            PlayerPositionType::Punter => "Punts the football",
            PlayerPositionType::Returner => "Returns kickoffs and punts",
        }
    }

    pub fn group(&self) -> PlayerFieldPositionGroup {
        match self {
            PlayerPositionType::Quarterback
            | PlayerPositionType::WideReceiver
            | PlayerPositionType::TightEnd
            | PlayerPositionType::RunningBack
            | PlayerPositionType::OffensiveLineman => PlayerFieldPositionGroup::Offense,

            PlayerPositionType::DefensiveLineman
            | PlayerPositionType::Linebacker
            | PlayerPositionType::DefensiveBack => PlayerFieldPositionGroup::Defense,

            PlayerPositionType::Kicker
            | PlayerPositionType::Holder
            | PlayerPositionType::Punter
            | PlayerPositionType::Returner => PlayerFieldPositionGroup::SpecialTeams,
        }
    }
}

impl Display for PlayerPositionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFieldPositionGroup {
    Offense,
    Defense,
    SpecialTeams,
}

impl PlayerFieldPositionGroup {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerFieldPositionGroup::Offense => "OFFENSE",
            PlayerFieldPositionGroup::Defense => "DEFENSE",
            PlayerFieldPositionGroup::SpecialTeams => "SPECIAL TEAMS",
        }
    }
}
