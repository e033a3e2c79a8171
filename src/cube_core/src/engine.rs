//! Face turns as sticker permutations.

use crate::{
    cube::Cube,
    moves::Move,
    state::{CubeState, Face, STICKERS_PER_FACE},
};

/// Clockwise rotation of a face's own stickers, as a gather: after the turn,
/// sticker `i` holds what was at `ROTATION[i]`.
const ROTATION: [usize; STICKERS_PER_FACE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

type Strip = (Face, [usize; 3]);

/// The four three-sticker strips around each face. A clockwise quarter turn
/// carries each strip into the next one, wrapping from the last to the first.
const fn ring(face: Face) -> [Strip; 4] {
    use Face::*;

    match face {
        U => [(L, [0, 1, 2]), (B, [0, 1, 2]), (R, [0, 1, 2]), (F, [0, 1, 2])],
        D => [(L, [6, 7, 8]), (F, [6, 7, 8]), (R, [6, 7, 8]), (B, [6, 7, 8])],
        L => [(U, [0, 3, 6]), (F, [0, 3, 6]), (D, [0, 3, 6]), (B, [8, 5, 2])],
        R => [(U, [2, 5, 8]), (B, [6, 3, 0]), (D, [2, 5, 8]), (F, [2, 5, 8])],
        F => [(U, [6, 7, 8]), (R, [0, 3, 6]), (D, [2, 1, 0]), (L, [8, 5, 2])],
        B => [(U, [0, 1, 2]), (L, [6, 3, 0]), (D, [8, 7, 6]), (R, [2, 5, 8])],
    }
}

/// One clockwise quarter turn of `face`.
fn quarter_turn(state: &CubeState, face: Face) -> CubeState {
    let mut next = *state;

    let old = state.face(face);
    *next.face_mut(face) = ROTATION.map(|i| old[i]);

    let strips = ring(face);
    for (k, (from_face, from)) in strips.iter().enumerate() {
        let (to_face, to) = strips[(k + 1) % strips.len()];
        for (&src, &dst) in from.iter().zip(&to) {
            next.face_mut(to_face)[dst] = state[*from_face][src];
        }
    }

    next
}

impl CubeState {
    #[must_use]
    pub fn apply(&self, mv: Move) -> CubeState {
        (0..mv.modifier.quarter_turns()).fold(*self, |state, _| quarter_turn(&state, mv.face))
    }

    #[must_use]
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        moves.iter().fold(*self, |state, &mv| state.apply(mv))
    }
}

/// A new cube with `mv` applied. The input is left untouched.
pub fn apply_move(cube: &Cube, mv: Move) -> Cube {
    Cube::from_legal(cube.state().apply(mv))
}

pub fn apply_moves(cube: &Cube, moves: &[Move]) -> Cube {
    Cube::from_legal(cube.state().apply_all(moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Color, Modifier,
        moves::{invert_moves, parse_notation},
        state::CENTER,
    };

    fn mv(text: &str) -> Move {
        text.parse().unwrap()
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        let scrambled = CubeState::solved().apply_all(&parse_notation("R U F' L2 D B").unwrap());

        for face in Face::ALL {
            let turn = Move::new(face, Modifier::Clockwise);
            let state = (0..4).fold(scrambled, |state, _| state.apply(turn));
            assert_eq!(state, scrambled, "{face}4 should be the identity");
        }
    }

    #[test]
    fn modifiers_agree_with_quarter_turns() {
        let start = CubeState::solved().apply_all(&parse_notation("F R2 D'").unwrap());

        for face in Face::ALL {
            let cw = Move::new(face, Modifier::Clockwise);
            let twice = start.apply(cw).apply(cw);
            let thrice = twice.apply(cw);

            assert_eq!(start.apply(Move::new(face, Modifier::Half)), twice);
            assert_eq!(start.apply(Move::new(face, Modifier::CounterClockwise)), thrice);
        }
    }

    #[test]
    fn u_turn_on_solved_cube() {
        let turned = CubeState::solved().apply(mv("U"));

        assert_eq!(turned[Face::U], [Color::Yellow; 9]);
        assert_eq!(turned[Face::D], [Color::White; 9]);
        // The front's top row now shows what was on the right.
        assert_eq!(turned[Face::F][..3], [Color::Orange; 3]);
        assert_eq!(turned[Face::R][..3], [Color::Blue; 3]);
        assert_eq!(turned[Face::B][..3], [Color::Red; 3]);
        assert_eq!(turned[Face::L][..3], [Color::Green; 3]);
        assert_eq!(turned[Face::F][3..], [Color::Green; 6]);
    }

    #[test]
    fn r_turn_on_solved_cube() {
        let turned = CubeState::solved().apply(mv("R"));

        for i in [2, 5, 8] {
            assert_eq!(turned[Face::F][i], Color::White);
            assert_eq!(turned[Face::U][i], Color::Green);
            assert_eq!(turned[Face::D][i], Color::Blue);
        }
        for i in [0, 3, 6] {
            assert_eq!(turned[Face::B][i], Color::Yellow);
        }
        assert_eq!(turned[Face::R], [Color::Orange; 9]);
        assert_eq!(turned[Face::L], [Color::Red; 9]);
    }

    #[test]
    fn f_turn_on_solved_cube() {
        let turned = CubeState::solved().apply(mv("F"));

        assert_eq!(turned[Face::U][6..], [Color::Red; 3]);
        for i in [0, 3, 6] {
            assert_eq!(turned[Face::R][i], Color::Yellow);
        }
        assert_eq!(turned[Face::D][..3], [Color::Orange; 3]);
        for i in [2, 5, 8] {
            assert_eq!(turned[Face::L][i], Color::White);
        }
    }

    #[test]
    fn centers_never_move() {
        let mut state = CubeState::solved();

        for turn in Move::ALL {
            state = state.apply(turn);
            for face in Face::ALL {
                assert_eq!(state[face][CENTER], CubeState::SOLVED[face][CENTER]);
            }
        }
    }

    #[test]
    fn sequence_then_inverse_is_the_identity() {
        let seq = parse_notation("R U R' U' F2 L D' B2 U").unwrap();
        let there = CubeState::solved().apply_all(&seq);

        assert!(!there.is_solved());
        assert!(there.apply_all(&invert_moves(&seq)).is_solved());
    }

    #[test]
    fn sexy_move_has_order_six() {
        let sexy = parse_notation("R U R' U'").unwrap();
        let mut state = CubeState::solved();

        for i in 1..=6 {
            state = state.apply_all(&sexy);
            assert_eq!(state.is_solved(), i == 6);
        }
    }

    #[test]
    fn repeated_quarter_turns_match_the_half_turn() {
        let fifty = (0..50).fold(CubeState::solved(), |state, _| state.apply(mv("R")));
        assert_eq!(fifty, CubeState::solved().apply(mv("R2")));
    }

    #[test]
    fn free_functions_leave_the_input_alone() {
        let cube = Cube::new();
        let turned = apply_move(&cube, mv("F"));

        assert!(cube.is_solved());
        assert!(!turned.is_solved());
        assert_eq!(
            apply_moves(&cube, &parse_notation("F F'").unwrap()),
            Cube::new()
        );
    }
}
