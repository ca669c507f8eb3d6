use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(EngineError::InvalidDirection(code))
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            "right" | "r" => Ok(Self::Right),
            "left" | "l" => Ok(Self::Left),
            _ => Err(EngineError::UnknownDirection(s.to_owned())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_discriminants() {
        for direction in Direction::iter() {
            assert_eq!(Direction::try_from(direction as u8), Ok(direction));
        }
    }

    #[test]
    fn rejects_out_of_range_code() {
        assert_eq!(
            Direction::try_from(4),
            Err(EngineError::InvalidDirection(4))
        );
        assert_eq!(
            Direction::try_from(u8::MAX),
            Err(EngineError::InvalidDirection(u8::MAX))
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("Up".parse(), Ok(Direction::Up));
        assert_eq!("l".parse(), Ok(Direction::Left));
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(EngineError::UnknownDirection("sideways".to_owned()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for direction in Direction::iter() {
            assert_eq!(direction.to_string().parse(), Ok(direction));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}
