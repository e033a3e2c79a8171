#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! A sticker-level model of the 3x3x3 cube: face turns, notation, legality
//! checks and a layer-by-layer solver.

use thiserror::Error;

pub mod cube;
pub mod engine;
pub mod moves;
pub(crate) mod pieces;
pub mod scramble;
pub mod solver;
pub mod state;
pub mod validation;

pub use cube::Cube;
pub use engine::{apply_move, apply_moves};
pub use moves::{
    Modifier, Move, format_notation, invert_move, invert_moves, is_valid_move, parse_notation,
};
pub use scramble::{random_scramble, scramble_cube};
pub use solver::{METHOD, Solution, SolutionStep, Stage, solve};
pub use state::{Color, CubeState, Face, Sticker, StickerSheet};
pub use validation::{ValidationResult, is_basic_valid, is_solved, validate, validate_state};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

#[derive(Error, Debug)]
pub enum CubeError {
    #[error("Invalid cube state: {}", .0.join("; "))]
    InvalidState(Vec<String>),
    #[error("Sticker index out of range, expected a value between 0 and 8 but got {0}")]
    IndexOutOfRange(usize),
    #[error("Invalid move: {0:?}")]
    InvalidMove(String),
    #[error("Could not read or write the cube state as JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
