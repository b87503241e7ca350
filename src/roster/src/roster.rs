use crate::{Player, PlayerPositionType};
use log::debug;
use std::ops::Index;

/// Ordered, append-only list of the players signed this session.
#[derive(Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Roster::default()
    }

    pub fn add(&mut self, player: Player) {
        debug!(
            "add player: {} (#{}), position: {}",
            player.name, player.number, player.position
        );

        self.players.push(player);
    }

    pub fn add_range(&mut self, players: Vec<Player>) {
        for player in players {
            self.add(player);
        }
    }

    pub fn count(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn last(&self) -> Option<&Player> {
        self.players.last()
    }

    pub fn by_position(&self, position: PlayerPositionType) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    /// Summary lines numbered from 1 in insertion order
    pub fn listing(&self) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .map(|(idx, player)| format!("{}. {}", idx + 1, player.describe()))
            .collect()
    }
}

impl Index<usize> for Roster {
    type Output = Player;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.players[idx]
    }
}
