//! Legality checks for cube states.
//!
//! The parity check here only verifies that every sticker is one of the six
//! colors. It does not check corner or edge permutation/orientation parity,
//! so a state can pass and still be unreachable with legal moves.
//!
//! The parity check only runs when there are no other errors. A sticker that
//! isn't a color always leaves some color short of nine, so the count errors
//! report it first and the parity message is never produced for a complete
//! sheet. It stays as the last line of defense for the conversion into
//! `CubeState`.

use itertools::Itertools;
use serde::Serialize;

use crate::state::{CENTER, Color, CubeState, Face, STICKERS_PER_FACE, Sticker, StickerSheet};

pub const INCOMPLETE_ERROR: &str =
    "Cube state is incomplete: every face needs exactly 9 stickers";
pub const CENTERS_ERROR: &str = "Centers must all be different colors";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> ValidationResult {
        ValidationResult {
            valid: errors.is_empty(),
            errors,
        }
    }
}

pub fn validate(sheet: &StickerSheet) -> ValidationResult {
    let Some(faces) = complete_faces(sheet) else {
        return ValidationResult::from_errors(vec![INCOMPLETE_ERROR.to_owned()]);
    };

    let mut errors = color_count_errors(&faces);

    if !faces.iter().map(|face| &face[CENTER]).all_unique() {
        errors.push(CENTERS_ERROR.to_owned());
    }

    if errors.is_empty() {
        let foreign = Face::ALL
            .into_iter()
            .zip(faces)
            .flat_map(|(face, stickers)| stickers.iter().map(move |sticker| (face, sticker)))
            .find(|(_, sticker)| sticker.color().is_none());

        if let Some((face, sticker)) = foreign {
            errors.push(format!(
                "Parity check failed: sticker {sticker} on face {face} is not a cube color"
            ));
        }
    }

    ValidationResult::from_errors(errors)
}

pub fn validate_state(state: &CubeState) -> ValidationResult {
    validate(&StickerSheet::from(state))
}

/// Completeness and color counts only.
pub fn is_basic_valid(sheet: &StickerSheet) -> bool {
    complete_faces(sheet).is_some_and(|faces| color_count_errors(&faces).is_empty())
}

pub fn is_solved(state: &CubeState) -> bool {
    state.is_solved()
}

/// Every face in `Face::ALL` order, or `None` if one is missing or the wrong
/// length.
fn complete_faces(sheet: &StickerSheet) -> Option<[&[Sticker]; 6]> {
    let mut faces: [&[Sticker]; 6] = [&[]; 6];

    for face in Face::ALL {
        let stickers = sheet.face(face)?;
        if stickers.len() != STICKERS_PER_FACE {
            return None;
        }
        faces[face as usize] = stickers;
    }

    Some(faces)
}

fn color_count_errors(faces: &[&[Sticker]; 6]) -> Vec<String> {
    let counts = faces
        .iter()
        .flat_map(|stickers| stickers.iter())
        .filter_map(Sticker::color)
        .counts();

    Color::ALL
        .into_iter()
        .filter_map(|color| {
            let count = counts.get(&color).copied().unwrap_or(0);
            (count != STICKERS_PER_FACE)
                .then(|| format!("Color {color} appears {count} times (expected 9)"))
        })
        .collect()
}
