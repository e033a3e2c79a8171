use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{CubeError, state::Face};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// A quarter turn clockwise, looking at the face
    Clockwise,
    /// `'`
    CounterClockwise,
    /// `2`
    Half,
}

impl Modifier {
    pub const ALL: [Self; 3] = [
        Modifier::Clockwise,
        Modifier::CounterClockwise,
        Modifier::Half,
    ];

    /// How many clockwise quarter turns this modifier amounts to.
    pub fn quarter_turns(self) -> usize {
        match self {
            Modifier::Clockwise => 1,
            Modifier::Half => 2,
            Modifier::CounterClockwise => 3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::CounterClockwise => "'",
            Modifier::Half => "2",
        }
    }

    #[must_use]
    pub fn inverse(self) -> Modifier {
        match self {
            Modifier::Clockwise => Modifier::CounterClockwise,
            Modifier::CounterClockwise => Modifier::Clockwise,
            Modifier::Half => Modifier::Half,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    pub const ALL: [Move; 18] = {
        let mut all = [Move::new(Face::U, Modifier::Clockwise); 18];

        let mut i = 0;
        while i < all.len() {
            all[i] = Move::new(Face::ALL[i / 3], Modifier::ALL[i % 3]);
            i += 1;
        }

        all
    };

    pub const fn new(face: Face, modifier: Modifier) -> Move {
        Move { face, modifier }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move::new(self.face, self.modifier.inverse())
    }

    /// The same turn as seen after turning the whole cube `quarter_turns`
    /// times about the up axis, so that the old right face is in front.
    #[must_use]
    pub(crate) fn seen_from(self, quarter_turns: usize) -> Move {
        const RING: [Face; 4] = [Face::F, Face::R, Face::B, Face::L];

        let face = match RING.iter().position(|&face| face == self.face) {
            Some(i) => RING[(i + quarter_turns) % RING.len()],
            None => self.face,
        };

        Move::new(face, self.modifier)
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_owned());

        let mut chars = s.chars();
        let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
        let modifier = match chars.as_str() {
            "" => Modifier::Clockwise,
            "'" => Modifier::CounterClockwise,
            "2" => Modifier::Half,
            _ => return Err(invalid()),
        };

        Ok(Move::new(face, modifier))
    }
}

impl TryFrom<String> for Move {
    type Error = CubeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(value: Move) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier.suffix())
    }
}

/// Whether `text` is exactly one move token, e.g. `R`, `U'` or `F2`.
pub fn is_valid_move(text: &str) -> bool {
    text.parse::<Move>().is_ok()
}

/// Parses whitespace separated notation, failing on the first token that
/// isn't a move.
pub fn parse_notation(text: &str) -> Result<Vec<Move>, CubeError> {
    text.split_whitespace().map(str::parse).collect()
}

pub fn format_notation(moves: &[Move]) -> String {
    moves.iter().join(" ")
}

pub fn invert_move(mv: Move) -> Move {
    mv.inverse()
}

pub fn invert_moves(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

pub(crate) fn seen_from(moves: &[Move], quarter_turns: usize) -> Vec<Move> {
    moves.iter().map(|mv| mv.seen_from(quarter_turns)).collect()
}
