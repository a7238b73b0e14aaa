//! The eight straight-line directions a word can run in.
//!
//! Each direction has a fixed integer code that is part of the interchange
//! format, independent of the order variants are declared in:
//!
//! | code | direction  | (dx, dy)  |
//! |------|------------|-----------|
//! | 0    | East       | (1, 0)    |
//! | 1    | South      | (0, 1)    |
//! | 2    | SouthEast  | (1, 1)    |
//! | 3    | SouthWest  | (-1, 1)   |
//! | 4    | West       | (-1, 0)   |
//! | 5    | North      | (0, -1)   |
//! | 6    | NorthWest  | (-1, -1)  |
//! | 7    | NorthEast  | (1, -1)   |
//!
//! `dx` is the column delta and `dy` the row delta (rows grow downwards).
//! Codes 4-7 are the reverses of codes 0-3, in the same order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HitParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Direction {
    East,
    South,
    SouthEast,
    SouthWest,
    West,
    North,
    NorthWest,
    NorthEast,
}

use Direction::{East, North, NorthEast, NorthWest, South, SouthEast, SouthWest, West};

impl Direction {
    /// Every direction, in the canonical scan order (which is also code order).
    pub const ALL: [Direction; 8] = [East, South, SouthEast, SouthWest, West, North, NorthWest, NorthEast];

    /// The four forward directions; the rest are their reverses.
    pub const FORWARD: [Direction; 4] = [East, South, SouthEast, SouthWest];

    /// Interchange code, 0-7.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            East => 0,
            South => 1,
            SouthEast => 2,
            SouthWest => 3,
            West => 4,
            North => 5,
            NorthWest => 6,
            NorthEast => 7,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Direction> {
        match code {
            0 => Some(East),
            1 => Some(South),
            2 => Some(SouthEast),
            3 => Some(SouthWest),
            4 => Some(West),
            5 => Some(North),
            6 => Some(NorthWest),
            7 => Some(NorthEast),
            _ => None,
        }
    }

    /// Column delta.
    #[must_use]
    pub const fn dx(self) -> isize {
        match self {
            East | SouthEast | NorthEast => 1,
            West | SouthWest | NorthWest => -1,
            South | North => 0,
        }
    }

    /// Row delta.
    #[must_use]
    pub const fn dy(self) -> isize {
        match self {
            South | SouthEast | SouthWest => 1,
            North | NorthWest | NorthEast => -1,
            East | West => 0,
        }
    }

    /// `(dx, dy)`, i.e. (column delta, row delta).
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        (self.dx(), self.dy())
    }

    /// The direction pointing the opposite way.
    #[must_use]
    pub const fn reverse(self) -> Direction {
        match self {
            East => West,
            South => North,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            West => East,
            North => South,
            NorthWest => SouthEast,
            NorthEast => SouthWest,
        }
    }

    /// True for the four "backward" directions (West, North, NorthWest, NorthEast).
    #[must_use]
    pub const fn is_reverse(self) -> bool {
        self.code() >= 4
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            East => "East",
            South => "South",
            SouthEast => "SouthEast",
            SouthWest => "SouthWest",
            West => "West",
            North => "North",
            NorthWest => "NorthWest",
            NorthEast => "NorthEast",
        }
    }

    /// Compass abbreviation ("E", "SW", ...).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            East => "E",
            South => "S",
            SouthEast => "SE",
            SouthWest => "SW",
            West => "W",
            North => "N",
            NorthWest => "NW",
            NorthEast => "NE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

impl TryFrom<u8> for Direction {
    type Error = HitParseError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::from_code(code).ok_or_else(|| HitParseError::InvalidDirection { value: code.to_string() })
    }
}

impl FromStr for Direction {
    type Err = HitParseError;

    /// Accepts a code ("0"-"7"), a full name ("southEast", "south-east") or an
    /// abbreviation ("SE"), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Direction::try_from(code);
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        Direction::ALL
            .into_iter()
            .find(|d| {
                d.name().eq_ignore_ascii_case(&normalized) || d.abbreviation().eq_ignore_ascii_case(&normalized)
            })
            .ok_or_else(|| HitParseError::InvalidDirection { value: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_interchange_table() {
        let expected = [
            (East, 0, (1, 0)),
            (South, 1, (0, 1)),
            (SouthEast, 2, (1, 1)),
            (SouthWest, 3, (-1, 1)),
            (West, 4, (-1, 0)),
            (North, 5, (0, -1)),
            (NorthWest, 6, (-1, -1)),
            (NorthEast, 7, (1, -1)),
        ];
        for (direction, code, delta) in expected {
            assert_eq!(direction.code(), code);
            assert_eq!(direction.delta(), delta, "{direction}");
            assert_eq!(Direction::from_code(code), Some(direction));
        }
        assert_eq!(Direction::from_code(8), None);
    }

    #[test]
    fn test_all_is_in_code_order() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(usize::from(direction.code()), i);
        }
    }

    #[test]
    fn test_reverse_negates_delta() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(direction.reverse().delta(), (-dx, -dy));
            assert_eq!(direction.reverse().reverse(), direction);
            assert_ne!(direction.is_reverse(), direction.reverse().is_reverse());
        }
    }

    #[test]
    fn test_forward_directions() {
        assert!(Direction::FORWARD.iter().all(|d| !d.is_reverse()));
        assert_eq!(Direction::FORWARD.map(Direction::reverse), [West, North, NorthWest, NorthEast]);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("east".parse::<Direction>().unwrap(), East);
        assert_eq!("SE".parse::<Direction>().unwrap(), SouthEast);
        assert_eq!("north-west".parse::<Direction>().unwrap(), NorthWest);
        assert_eq!(" 7 ".parse::<Direction>().unwrap(), NorthEast);
        assert!(matches!("8".parse::<Direction>(), Err(HitParseError::InvalidDirection { .. })));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_try_from_out_of_range() {
        let err = Direction::try_from(12).unwrap_err();
        assert_eq!(err.code(), "H003");
        assert!(err.to_string().contains("\"12\""));
    }
}
