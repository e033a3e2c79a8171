//! One progress step per stage. Each function returns the moves that get the
//! working state closer to the stage's goal, or `None` when it can't tell.

use std::sync::LazyLock;

use crate::{
    moves::{Modifier, Move, parse_notation, seen_from},
    pieces::{CornerSlot, EdgeSlot, Layer},
    solver::search::{Macro, face_turns, search, top_turns},
    state::{CubeState, Face},
};

pub(super) const CORNER_TRIGGER: &str = "R U R' U'";
pub(super) const RIGHT_INSERT: &str = "U R U' R' U' F' U F";
pub(super) const LEFT_INSERT: &str = "U' L' U L U F U' F'";
pub(super) const CROSS_TRIGGER: &str = "F R U R' U' F'";
/// Swaps the front and left top edges.
pub(super) const EDGE_SWAP: &str = "R U R' U R U2 R' U";
/// Cycles three top corners, leaving the front right one in place.
pub(super) const CORNER_CYCLE: &str = "U R U' L' U R' U' L";
pub(super) const CORNER_TWIST: &str = "R' D' R D";

struct Algorithms {
    corner_trigger: Vec<Move>,
    right_insert: Vec<Move>,
    left_insert: Vec<Move>,
    cross_trigger: Vec<Move>,
    edge_swap: Vec<Move>,
    corner_cycle: Vec<Move>,
    corner_twist: Vec<Move>,
}

static ALGORITHMS: LazyLock<Algorithms> = LazyLock::new(|| {
    let alg = |text: &str| parse_notation(text).expect("built-in algorithms are valid notation");

    Algorithms {
        corner_trigger: alg(CORNER_TRIGGER),
        right_insert: alg(RIGHT_INSERT),
        left_insert: alg(LEFT_INSERT),
        cross_trigger: alg(CROSS_TRIGGER),
        edge_swap: alg(EDGE_SWAP),
        corner_cycle: alg(CORNER_CYCLE),
        corner_twist: alg(CORNER_TWIST),
    }
});

const U: Move = Move::new(Face::U, Modifier::Clockwise);

/// The four ways of holding the top layer, tried in this order.
const TOP_ADJUSTMENTS: [&[Move]; 4] = [
    &[],
    &[U],
    &[Move::new(Face::U, Modifier::Half)],
    &[Move::new(Face::U, Modifier::CounterClockwise)],
];

fn then(setup: &[Move], moves: &[Move]) -> Vec<Move> {
    setup.iter().chain(moves).copied().collect()
}

fn edges(layer: Layer) -> impl Iterator<Item = EdgeSlot> {
    (0..4).map(move |view| EdgeSlot::new(layer, view))
}

fn corners(layer: Layer) -> impl Iterator<Item = CornerSlot> {
    (0..4).map(move |view| CornerSlot::new(layer, view))
}

fn solved_edges(state: &CubeState, layer: Layer) -> Vec<EdgeSlot> {
    edges(layer).filter(|edge| edge.is_solved(state)).collect()
}

pub(super) fn cross_done(state: &CubeState) -> bool {
    edges(Layer::Bottom).all(|edge| edge.is_solved(state))
}

pub(super) fn first_layer_done(state: &CubeState) -> bool {
    cross_done(state) && corners(Layer::Bottom).all(|corner| corner.is_solved(state))
}

pub(super) fn middle_layer_done(state: &CubeState) -> bool {
    first_layer_done(state) && edges(Layer::Middle).all(|edge| edge.is_solved(state))
}

fn up_showing(state: &CubeState, index: usize) -> bool {
    state[Face::U][index] == state.center(Face::U)
}

pub(super) fn yellow_cross_done(state: &CubeState) -> bool {
    [1, 3, 5, 7].into_iter().all(|i| up_showing(state, i))
}

pub(super) fn top_edges_done(state: &CubeState) -> bool {
    edges(Layer::Top).all(|edge| edge.is_solved(state))
}

pub(super) fn top_corners_placed(state: &CubeState) -> bool {
    corners(Layer::Top).all(|corner| corner.is_permuted(state))
}

pub(super) struct CrossEdge {
    edge: EdgeSlot,
    face_turns: Vec<Macro>,
}

impl CrossEdge {
    pub(super) fn new(view: usize) -> CrossEdge {
        CrossEdge {
            edge: EdgeSlot::new(Layer::Bottom, view),
            face_turns: face_turns(),
        }
    }

    pub(super) fn done(&self, state: &CubeState) -> bool {
        self.edge.is_solved(state)
    }

    /// Brings the edge up into the top layer, then searches for an insertion
    /// that doesn't disturb the edges already in place.
    pub(super) fn step(&self, state: &CubeState) -> Option<Vec<Move>> {
        let keep = solved_edges(state, Layer::Bottom);
        let kept = |t: &CubeState| keep.iter().all(|edge| edge.is_solved(t));

        if self.edge.locate(state).layer() == Layer::Top {
            search(state, &self.face_turns, 5, &|t| {
                kept(t) && self.edge.is_solved(t)
            })
        } else {
            search(state, &self.face_turns, 3, &|t| {
                kept(t) && self.edge.locate(t).layer() == Layer::Top
            })
        }
    }
}

pub(super) struct FirstLayerCorner {
    corner: CornerSlot,
    top_turns: Vec<Macro>,
}

impl FirstLayerCorner {
    pub(super) fn new(view: usize) -> FirstLayerCorner {
        FirstLayerCorner {
            corner: CornerSlot::new(Layer::Bottom, view),
            top_turns: top_turns(),
        }
    }

    pub(super) fn done(&self, state: &CubeState) -> bool {
        cross_done(state) && self.corner.is_solved(state)
    }

    pub(super) fn step(&self, state: &CubeState) -> Option<Vec<Move>> {
        let trigger = &ALGORITHMS.corner_trigger;
        let found = self.corner.locate(state);

        if found.layer() == Layer::Bottom {
            return Some(seen_from(trigger, found.view()));
        }
        if found.view() == self.corner.view() {
            return Some(seen_from(trigger, self.corner.view()));
        }

        let above = CornerSlot::new(Layer::Top, self.corner.view());
        search(state, &self.top_turns, 1, &|t| self.corner.locate(t) == above)
    }
}

pub(super) struct MiddleEdges {
    alphabet: Vec<Macro>,
}

impl MiddleEdges {
    pub(super) fn new() -> MiddleEdges {
        let mut alphabet = top_turns();
        for insert in [&ALGORITHMS.right_insert, &ALGORITHMS.left_insert] {
            alphabet.extend((0..4).map(|view| Macro::algorithm(seen_from(insert, view))));
        }

        MiddleEdges { alphabet }
    }

    /// Works on the first unsolved middle edge. One stuck in the wrong middle
    /// slot gets popped out into the top layer first.
    pub(super) fn step(&self, state: &CubeState) -> Option<Vec<Move>> {
        let edge = edges(Layer::Middle).find(|edge| !edge.is_solved(state))?;
        let found = edge.locate(state);

        if found.layer() == Layer::Middle {
            return Some(seen_from(&ALGORITHMS.right_insert, found.view()));
        }

        let keep = solved_edges(state, Layer::Middle);
        search(state, &self.alphabet, 2, &|t| {
            first_layer_done(t)
                && keep.iter().all(|kept| kept.is_solved(t))
                && edge.is_solved(t)
        })
    }
}

/// Dot, `L` or line. The `L` has to sit at the back left and the line has to
/// run left to right before the trigger is applied.
pub(super) fn yellow_cross_step(state: &CubeState) -> Option<Vec<Move>> {
    let trigger = &ALGORITHMS.cross_trigger;

    for setup in TOP_ADJUSTMENTS {
        let held = state.apply_all(setup);
        let line = up_showing(&held, 3) && up_showing(&held, 5);
        let back_left = up_showing(&held, 1)
            && up_showing(&held, 3)
            && !up_showing(&held, 5)
            && !up_showing(&held, 7);

        if line || back_left {
            return Some(then(setup, trigger));
        }
    }

    Some(trigger.clone())
}

pub(super) fn top_edges_step(state: &CubeState) -> Option<Vec<Move>> {
    let swap = &ALGORITHMS.edge_swap;

    if let Some(setup) = TOP_ADJUSTMENTS
        .into_iter()
        .find(|setup| top_edges_done(&state.apply_all(setup)))
    {
        return Some(setup.to_vec());
    }

    for setup in TOP_ADJUSTMENTS {
        let held = state.apply_all(setup);
        for view in 0..4 {
            let right = EdgeSlot::new(Layer::Top, view + 1);
            let back = EdgeSlot::new(Layer::Top, view + 2);

            if right.is_solved(&held) && back.is_solved(&held) {
                return Some(then(setup, &seen_from(swap, view)));
            }
        }
    }

    Some(swap.clone())
}

pub(super) fn top_corners_step(state: &CubeState) -> Option<Vec<Move>> {
    let cycle = &ALGORITHMS.corner_cycle;

    let view = corners(Layer::Top)
        .position(|corner| corner.is_permuted(state))
        .unwrap_or(0);

    Some(seen_from(cycle, view))
}

/// Twist the front right corner until it shows the top color, then bring the
/// next corner round.
pub(super) fn orient_corners_step(state: &CubeState) -> Option<Vec<Move>> {
    if up_showing(state, 8) {
        Some(vec![U])
    } else {
        Some(ALGORITHMS.corner_twist.clone())
    }
}
