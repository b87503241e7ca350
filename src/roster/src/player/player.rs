use crate::PlayerPositionType;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub number: i32,
    pub position: PlayerPositionType,
}

impl Player {
    pub fn new(name: impl Into<String>, number: i32, position: PlayerPositionType) -> Self {
        Player {
            name: name.into(),
            number,
            position,
        }
    }

    #[inline]
    pub fn position_label(&self) -> &'static str {
        self.position.label()
    }

    #[inline]
    pub fn action_description(&self) -> &'static str {
        self.position.action_description()
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

//DISPLAY
impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Name: {} | Number: {} | Position: {} | Action: {}",
            self.name,
            self.number,
            self.position_label(),
            self.action_description()
        )
    }
}
