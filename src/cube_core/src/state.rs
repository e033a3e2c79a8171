use std::{collections::BTreeMap, fmt, ops::Index, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{CubeError, validation};

pub const STICKERS_PER_FACE: usize = 9;
/// Index of the center sticker on every face.
pub const CENTER: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, L, R, F, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl FromStr for Face {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::from_letter(letter).ok_or(()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The six sticker colors. The ordering exists only so that pieces can be
/// compared as sorted color sets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "O")]
    Orange,
    #[serde(rename = "B")]
    Blue,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    pub fn from_letter(letter: char) -> Option<Color> {
        Color::ALL.into_iter().find(|color| color.letter() == letter)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One entry of an unchecked sticker sheet. Anything that isn't a color
/// letter is kept verbatim so the validator can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sticker {
    Color(Color),
    Unknown(String),
}

impl Sticker {
    pub fn color(&self) -> Option<Color> {
        match self {
            Sticker::Color(color) => Some(*color),
            Sticker::Unknown(_) => None,
        }
    }
}

impl From<Color> for Sticker {
    fn from(value: Color) -> Self {
        Sticker::Color(value)
    }
}

impl From<String> for Sticker {
    fn from(value: String) -> Self {
        let color = {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => Color::from_letter(letter),
                _ => None,
            }
        };

        match color {
            Some(color) => Sticker::Color(color),
            None => Sticker::Unknown(value),
        }
    }
}

impl From<Sticker> for String {
    fn from(value: Sticker) -> Self {
        match value {
            Sticker::Color(color) => color.letter().to_string(),
            Sticker::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Sticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sticker::Color(color) => write!(f, "{color}"),
            Sticker::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

/// A cube as it arrives from outside the engine: faces may be missing, have
/// the wrong length, or hold symbols that aren't colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerSheet(BTreeMap<Face, Vec<Sticker>>);

impl StickerSheet {
    pub fn remove(&mut self, face: Face) -> Option<Vec<Sticker>> {
        self.0.remove(&face)
    }

    pub fn face(&self, face: Face) -> Option<&[Sticker]> {
        self.0.get(&face).map(Vec::as_slice)
    }

    pub fn face_mut(&mut self, face: Face) -> Option<&mut Vec<Sticker>> {
        self.0.get_mut(&face)
    }
}

impl From<&CubeState> for StickerSheet {
    fn from(value: &CubeState) -> Self {
        StickerSheet(
            Face::ALL
                .into_iter()
                .map(|face| (face, value[face].map(Sticker::Color).to_vec()))
                .collect(),
        )
    }
}

impl From<CubeState> for StickerSheet {
    fn from(value: CubeState) -> Self {
        StickerSheet::from(&value)
    }
}

/// All 54 stickers, indexed by face and then row-major within the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "StickerSheet", try_from = "StickerSheet")]
pub struct CubeState {
    faces: [[Color; STICKERS_PER_FACE]; 6],
}

impl CubeState {
    /// Yellow up, green front, white down.
    pub const SOLVED: CubeState = CubeState::uniform([
        Color::Yellow,
        Color::White,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
    ]);

    /// Every face filled with one color, given in `Face::ALL` order.
    pub const fn uniform(colors: [Color; 6]) -> CubeState {
        let mut faces = [[Color::White; STICKERS_PER_FACE]; 6];

        let mut i = 0;
        while i < faces.len() {
            faces[i] = [colors[i]; STICKERS_PER_FACE];
            i += 1;
        }

        CubeState { faces }
    }

    pub fn solved() -> CubeState {
        CubeState::SOLVED
    }

    pub fn face(&self, face: Face) -> &[Color; STICKERS_PER_FACE] {
        &self.faces[face as usize]
    }

    pub fn sticker(&self, face: Face, index: usize) -> Result<Color, CubeError> {
        self.face(face)
            .get(index)
            .copied()
            .ok_or(CubeError::IndexOutOfRange(index))
    }

    pub fn center(&self, face: Face) -> Color {
        self.faces[face as usize][CENTER]
    }

    pub fn set_sticker(&mut self, face: Face, index: usize, color: Color) -> Result<(), CubeError> {
        let slot = self.faces[face as usize]
            .get_mut(index)
            .ok_or(CubeError::IndexOutOfRange(index))?;
        *slot = color;

        Ok(())
    }

    pub fn is_solved(&self) -> bool {
        self.faces
            .iter()
            .all(|face| face.iter().all(|&sticker| sticker == face[CENTER]))
    }

    pub(crate) fn face_mut(&mut self, face: Face) -> &mut [Color; STICKERS_PER_FACE] {
        &mut self.faces[face as usize]
    }

    fn row(&self, face: Face, row: usize) -> String {
        self[face][row * 3..row * 3 + 3].iter().join(" ")
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::SOLVED
    }
}

impl Index<Face> for CubeState {
    type Output = [Color; STICKERS_PER_FACE];

    fn index(&self, index: Face) -> &Self::Output {
        self.face(index)
    }
}

impl TryFrom<StickerSheet> for CubeState {
    type Error = CubeError;

    fn try_from(sheet: StickerSheet) -> Result<Self, Self::Error> {
        let result = validation::validate(&sheet);
        if !result.valid {
            return Err(CubeError::InvalidState(result.errors));
        }

        let mut faces = [[Color::White; STICKERS_PER_FACE]; 6];
        for face in Face::ALL {
            let stickers = sheet.face(face).unwrap_or_default();
            for (slot, sticker) in faces[face as usize].iter_mut().zip(stickers) {
                *slot = sticker.color().ok_or_else(|| {
                    CubeError::InvalidState(vec![format!(
                        "Sticker {sticker:?} on face {face} is not a color"
                    )])
                })?;
            }
        }

        Ok(CubeState { faces })
    }
}

/// The unfolded net: `U` on top, the `L F R B` band, `D` underneath.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = " ".repeat(6);
        let mut lines = Vec::with_capacity(9);

        for row in 0..3 {
            lines.push(format!("{pad}{}", self.row(Face::U, row)));
        }
        for row in 0..3 {
            lines.push(
                [Face::L, Face::F, Face::R, Face::B]
                    .into_iter()
                    .map(|face| self.row(face, row))
                    .join(" "),
            );
        }
        for row in 0..3 {
            lines.push(format!("{pad}{}", self.row(Face::D, row)));
        }

        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_state_has_distinct_uniform_faces() {
        let solved = CubeState::solved();
        assert!(solved.is_solved());
        assert_eq!(solved.center(Face::U), Color::Yellow);
        assert_eq!(solved.center(Face::D), Color::White);
        assert_eq!(solved[Face::F], [Color::Green; 9]);
    }

    #[test]
    fn sticker_bounds() {
        let mut state = CubeState::solved();
        assert_eq!(state.sticker(Face::R, 8).unwrap(), Color::Orange);
        assert!(matches!(
            state.sticker(Face::R, 9),
            Err(CubeError::IndexOutOfRange(9))
        ));
        assert!(state.set_sticker(Face::L, 12, Color::Blue).is_err());

        state.set_sticker(Face::L, 0, Color::Blue).unwrap();
        assert_eq!(state[Face::L][0], Color::Blue);
        assert!(!state.is_solved());
    }

    #[test]
    fn sticker_strings() {
        assert_eq!(Sticker::from("G".to_owned()), Sticker::Color(Color::Green));
        assert_eq!(
            Sticker::from("g".to_owned()),
            Sticker::Unknown("g".to_owned())
        );
        assert_eq!(
            Sticker::from("GG".to_owned()),
            Sticker::Unknown("GG".to_owned())
        );
        assert_eq!(String::from(Sticker::Color(Color::Orange)), "O");
    }

    #[test]
    fn face_letters() {
        for face in Face::ALL {
            assert_eq!(face.to_string().parse::<Face>(), Ok(face));
        }
        assert!("u".parse::<Face>().is_err());
        assert!("UU".parse::<Face>().is_err());
    }

    #[test]
    fn net_layout() {
        let net = CubeState::solved().to_string();
        let lines = net.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      Y Y Y");
        assert_eq!(lines[4], "R R R G G G O O O B B B");
        assert_eq!(lines[8], "      W W W");
    }

    #[test]
    fn json_sheet_is_keyed_by_face() {
        let json = serde_json::to_string(&CubeState::solved()).unwrap();
        assert!(json.starts_with(r#"{"U":["Y","Y","Y","Y","Y","Y","Y","Y","Y"],"D":["W""#));

        let back = serde_json::from_str::<CubeState>(&json).unwrap();
        assert_eq!(back, CubeState::solved());
    }

    #[test]
    fn deserializing_an_illegal_sheet_fails() {
        let json = serde_json::to_string(&CubeState::solved()).unwrap();
        let json = json.replacen(r#""Y""#, r#""W""#, 1);

        assert!(serde_json::from_str::<CubeState>(&json).is_err());
    }
}
