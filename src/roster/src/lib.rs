pub mod player;
pub mod roster;

pub use player::{Player, PlayerFieldPositionGroup, PlayerPositionType, POSITIONS_COUNT};
pub use roster::Roster;
