//! The two players and the contents of a single board cell.

use crate::board::EngineError;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// One of the two players in a game.
///
/// Players (de)serialize as their numbers, `1` and `2`.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    #[display(fmt = "Player 1")]
    Player1,
    #[display(fmt = "Player 2")]
    Player2,
}

impl Default for Player {
    /// Gets the conventional starting player.
    fn default() -> Self {
        Self::Player1
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl Player {
    /// The player's number: 1 or 2.
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = EngineError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Player::Player1),
            2 => Ok(Player::Player2),
            _ => Err(EngineError::InvalidPlayer { number }),
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

#[derive(Debug, Display, Error, PartialEq)]
#[display(fmt = "invalid player string")]
pub struct ParsePlayerError;

/// Parse a player from "1" / "2" or "player1" / "player2" (any case).
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let number = lowered.strip_prefix("player").unwrap_or(lowered.as_str());
        match number.trim() {
            "1" => Ok(Player::Player1),
            "2" => Ok(Player::Player2),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The contents of one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Self::Occupied(player)
    }
}

impl Cell {
    /// The player owning this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used when rendering a board.
    pub(crate) fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::Player1) => '#',
            Cell::Occupied(Player::Player2) => 'O',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn player_not() {
        assert_eq!(!Player::Player1, Player::Player2);
        assert_eq!(!Player::Player2, Player::Player1);
    }

    #[test]
    fn player_from_number() {
        assert_eq!(Player::try_from(1u8), Ok(Player::Player1));
        assert_eq!(Player::try_from(2u8), Ok(Player::Player2));
        assert_eq!(
            Player::try_from(0u8),
            Err(EngineError::InvalidPlayer { number: 0 })
        );
        assert_eq!(
            Player::try_from(3u8),
            Err(EngineError::InvalidPlayer { number: 3 })
        );
    }

    #[test]
    fn player_from_str() {
        assert_eq!(Player::from_str("1"), Ok(Player::Player1));
        assert_eq!(Player::from_str("Player2"), Ok(Player::Player2));
        assert_eq!(Player::from_str("player 1"), Ok(Player::Player1));
        assert_eq!(Player::from_str("3"), Err(ParsePlayerError));
        assert_eq!(Player::from_str(""), Err(ParsePlayerError));
    }

    #[test]
    fn player_to_str() {
        assert_eq!(Player::Player1.to_string(), "Player 1");
        assert_eq!(Player::Player2.to_string(), "Player 2");
    }

    #[test]
    fn cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::from(Player::Player2).player(), Some(Player::Player2));
        assert!(Cell::default().is_empty());
    }
}
