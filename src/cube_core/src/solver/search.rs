use log::trace;

use crate::{
    moves::{Modifier, Move},
    state::{CubeState, Face},
};

/// One letter of a search alphabet: either a single turn or a whole
/// algorithm that is tried as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Macro {
    pub moves: Vec<Move>,
    /// Consecutive entries of the same family are never tried back to back,
    /// e.g. `R` followed by `R2`. Algorithms have no family.
    pub family: Option<Face>,
}

impl Macro {
    pub fn turn(mv: Move) -> Macro {
        Macro {
            moves: vec![mv],
            family: Some(mv.face),
        }
    }

    pub fn algorithm(moves: Vec<Move>) -> Macro {
        Macro {
            moves,
            family: None,
        }
    }
}

/// All 18 face turns.
pub fn face_turns() -> Vec<Macro> {
    Move::ALL.into_iter().map(Macro::turn).collect()
}

pub fn top_turns() -> Vec<Macro> {
    Modifier::ALL
        .into_iter()
        .map(|modifier| Macro::turn(Move::new(Face::U, modifier)))
        .collect()
}

/// Iterative deepening over `alphabet`. Returns the first sequence of at most
/// `max_depth` letters after which `goal` holds, or `None` if there is none.
pub fn search(
    state: &CubeState,
    alphabet: &[Macro],
    max_depth: usize,
    goal: &dyn Fn(&CubeState) -> bool,
) -> Option<Vec<Move>> {
    if goal(state) {
        return Some(vec![]);
    }

    let mut path = Vec::with_capacity(max_depth);
    for depth in 1..=max_depth {
        trace!("Searching depth {depth}");
        if descend(state, alphabet, goal, depth, None, &mut path) {
            return Some(path.into_iter().flat_map(|letter| letter.moves.iter().copied()).collect());
        }
    }

    None
}

fn descend<'a>(
    state: &CubeState,
    alphabet: &'a [Macro],
    goal: &dyn Fn(&CubeState) -> bool,
    remaining: usize,
    previous: Option<Face>,
    path: &mut Vec<&'a Macro>,
) -> bool {
    for letter in alphabet {
        if letter.family.is_some() && letter.family == previous {
            continue;
        }

        let next = state.apply_all(&letter.moves);
        path.push(letter);

        let found = if remaining == 1 {
            goal(&next)
        } else {
            descend(&next, alphabet, goal, remaining - 1, letter.family, path)
        };
        if found {
            return true;
        }

        path.pop();
    }

    false
}
