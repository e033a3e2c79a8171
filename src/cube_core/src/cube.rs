use std::fmt;

use log::debug;

use crate::{
    CubeError,
    moves::{Move, format_notation, parse_notation},
    state::{Color, CubeState, Face, STICKERS_PER_FACE, StickerSheet},
    validation,
};

/// A cube that is always in a legal sticker configuration. Every way of
/// building or replacing its state goes through validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cube {
    state: CubeState,
}

impl Cube {
    pub fn new() -> Cube {
        Cube::default()
    }

    pub fn from_state(state: CubeState) -> Result<Cube, CubeError> {
        let result = validation::validate_state(&state);
        if !result.valid {
            return Err(CubeError::InvalidState(result.errors));
        }

        Ok(Cube::from_legal(state))
    }

    pub fn from_sheet(sheet: StickerSheet) -> Result<Cube, CubeError> {
        Ok(Cube::from_legal(CubeState::try_from(sheet)?))
    }

    /// Wraps a state reached from a legal one by face turns.
    pub(crate) fn from_legal(state: CubeState) -> Cube {
        Cube { state }
    }

    pub fn from_json(json: &str) -> Result<Cube, CubeError> {
        let sheet = serde_json::from_str::<StickerSheet>(json)?;
        Cube::from_sheet(sheet)
    }

    pub fn to_json(&self) -> Result<String, CubeError> {
        Ok(serde_json::to_string(&self.state)?)
    }

    pub fn state(&self) -> CubeState {
        self.state
    }

    /// Replaces the whole state. On a validation failure the cube keeps its
    /// previous state.
    pub fn set_state(&mut self, sheet: StickerSheet) -> Result<(), CubeError> {
        self.state = CubeState::try_from(sheet)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = CubeState::solved();
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn sticker(&self, face: Face, index: usize) -> Result<Color, CubeError> {
        self.state.sticker(face, index)
    }

    pub fn face(&self, face: Face) -> [Color; STICKERS_PER_FACE] {
        self.state[face]
    }

    pub fn center_color(&self, face: Face) -> Color {
        self.state.center(face)
    }

    pub fn apply_move(&mut self, mv: Move) {
        self.state = self.state.apply(mv);
    }

    pub fn apply_moves(&mut self, moves: &[Move]) {
        debug!("Applying {}", format_notation(moves));
        self.state = self.state.apply_all(moves);
    }

    /// Parses all of `notation` before touching the cube, so a bad token
    /// leaves it unchanged.
    pub fn apply_notation(&mut self, notation: &str) -> Result<Vec<Move>, CubeError> {
        let moves = parse_notation(notation)?;
        self.apply_moves(&moves);
        Ok(moves)
    }
}

impl TryFrom<CubeState> for Cube {
    type Error = CubeError;

    fn try_from(value: CubeState) -> Result<Self, Self::Error> {
        Cube::from_state(value)
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.state)
    }
}
