//! Layer by layer solving: seven fixed stages, each a bounded loop of one
//! progress step at a time.

use log::{debug, info};
use serde::Serialize;

use crate::{
    cube::Cube,
    moves::{Move, format_notation},
    state::CubeState,
    success, working,
};

pub mod search;
mod stages;

use stages::{CrossEdge, FirstLayerCorner, MiddleEdges};

pub const METHOD: &str = "Beginner's Method (Layer by Layer)";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    WhiteCross,
    WhiteCorners,
    MiddleLayer,
    YellowCross,
    PositionYellowCross,
    PositionYellowCorners,
    OrientYellowCorners,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::WhiteCross,
        Stage::WhiteCorners,
        Stage::MiddleLayer,
        Stage::YellowCross,
        Stage::PositionYellowCross,
        Stage::PositionYellowCorners,
        Stage::OrientYellowCorners,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::WhiteCross => "White Cross",
            Stage::WhiteCorners => "White Corners",
            Stage::MiddleLayer => "Middle Layer",
            Stage::YellowCross => "Yellow Cross",
            Stage::PositionYellowCross => "Position Yellow Cross",
            Stage::PositionYellowCorners => "Position Yellow Corners",
            Stage::OrientYellowCorners => "Orient Yellow Corners",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Stage::WhiteCross => "Solve the four white edges so each matches its side center",
            Stage::WhiteCorners => "Insert the four white corners to finish the first layer",
            Stage::MiddleLayer => "Insert the four middle layer edges",
            Stage::YellowCross => "Make a yellow cross on the top face",
            Stage::PositionYellowCross => "Match the yellow edges to their side centers",
            Stage::PositionYellowCorners => "Move the yellow corners into their home positions",
            Stage::OrientYellowCorners => "Twist the yellow corners to finish the cube",
        }
    }

    /// The algorithm the stage repeats. The cross is placed by search instead.
    pub fn trigger(self) -> Option<&'static str> {
        match self {
            Stage::WhiteCross => None,
            Stage::WhiteCorners => Some(stages::CORNER_TRIGGER),
            Stage::MiddleLayer => Some(stages::RIGHT_INSERT),
            Stage::YellowCross => Some(stages::CROSS_TRIGGER),
            Stage::PositionYellowCross => Some(stages::EDGE_SWAP),
            Stage::PositionYellowCorners => Some(stages::CORNER_CYCLE),
            Stage::OrientYellowCorners => Some(stages::CORNER_TWIST),
        }
    }

    /// Upper bound on progress steps. The cross and corner stages apply it
    /// per piece.
    pub fn iteration_cap(self) -> usize {
        match self {
            Stage::WhiteCross | Stage::WhiteCorners | Stage::OrientYellowCorners => 50,
            Stage::MiddleLayer => 100,
            Stage::YellowCross | Stage::PositionYellowCross | Stage::PositionYellowCorners => 10,
        }
    }

    /// Whether the stage's goal holds.
    pub fn is_done(self, state: &CubeState) -> bool {
        match self {
            Stage::WhiteCross => stages::cross_done(state),
            Stage::WhiteCorners => stages::first_layer_done(state),
            Stage::MiddleLayer => stages::middle_layer_done(state),
            Stage::YellowCross => stages::yellow_cross_done(state),
            Stage::PositionYellowCross => stages::top_edges_done(state),
            Stage::PositionYellowCorners => stages::top_corners_placed(state),
            Stage::OrientYellowCorners => state.is_solved(),
        }
    }

    /// Advances `state` as far as the stage gets and returns what it played.
    fn run(self, state: &mut CubeState) -> SolutionStep {
        let cap = self.iteration_cap();
        let mut run = Run {
            state,
            moves: vec![],
            iterations: 0,
        };

        match self {
            Stage::WhiteCross => {
                for view in 0..4 {
                    let edge = CrossEdge::new(view);
                    run.capped(cap, |s| edge.done(s), |s| edge.step(s));
                }
            }
            Stage::WhiteCorners => {
                for view in 0..4 {
                    let corner = FirstLayerCorner::new(view);
                    run.capped(cap, |s| corner.done(s), |s| corner.step(s));
                }
            }
            Stage::MiddleLayer => {
                let middle = MiddleEdges::new();
                run.capped(cap, stages::middle_layer_done, |s| middle.step(s));
            }
            Stage::YellowCross => {
                run.capped(cap, stages::yellow_cross_done, stages::yellow_cross_step);
            }
            Stage::PositionYellowCross => {
                run.capped(cap, stages::top_edges_done, stages::top_edges_step);
            }
            Stage::PositionYellowCorners => {
                run.capped(cap, stages::top_corners_placed, stages::top_corners_step);
            }
            Stage::OrientYellowCorners => {
                run.capped(cap, CubeState::is_solved, stages::orient_corners_step);
            }
        }

        debug!(
            working!("{}: {} moves over {} steps{}"),
            self.name(),
            run.moves.len(),
            run.iterations,
            if self.is_done(run.state) { "" } else { " (incomplete)" }
        );

        SolutionStep::new(self, run.moves)
    }
}

struct Run<'a> {
    state: &'a mut CubeState,
    moves: Vec<Move>,
    iterations: usize,
}

impl Run<'_> {
    /// Steps until `goal` holds, `cap` steps have been taken, or `step` gives
    /// up.
    fn capped(
        &mut self,
        cap: usize,
        goal: impl Fn(&CubeState) -> bool,
        step: impl Fn(&CubeState) -> Option<Vec<Move>>,
    ) {
        let mut taken = 0;

        while !goal(self.state) && taken < cap {
            let Some(moves) = step(self.state) else {
                break;
            };

            *self.state = self.state.apply_all(&moves);
            self.moves.extend(moves);
            taken += 1;
        }

        self.iterations += taken;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionStep {
    pub name: String,
    pub description: String,
    pub moves: Vec<Move>,
    pub move_count: usize,
}

impl SolutionStep {
    fn new(stage: Stage, moves: Vec<Move>) -> SolutionStep {
        SolutionStep {
            name: stage.name().to_owned(),
            description: stage.description().to_owned(),
            move_count: moves.len(),
            moves,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub moves: Vec<Move>,
    pub steps: Vec<SolutionStep>,
    pub total_moves: usize,
    pub method: String,
    pub optimized: bool,
}

impl Solution {
    fn from_steps(steps: Vec<SolutionStep>) -> Solution {
        let moves = steps
            .iter()
            .flat_map(|step| step.moves.iter().copied())
            .collect::<Vec<_>>();
        let steps = steps
            .into_iter()
            .filter(|step| !step.moves.is_empty())
            .collect();

        Solution {
            total_moves: moves.len(),
            moves,
            steps,
            method: METHOD.to_owned(),
            optimized: false,
        }
    }

    pub fn notation(&self) -> String {
        format_notation(&self.moves)
    }

    /// Replays the solution on `cube` and checks that it ends up solved.
    pub fn verify(&self, cube: &Cube) -> bool {
        cube.state().apply_all(&self.moves).is_solved()
    }
}

/// Solves `cube` with the layer by layer method. The input is never modified.
///
/// A state that passes validation but can't be reached with legal moves may
/// exhaust the stage caps; the result then doesn't solve the cube, which
/// `Solution::verify` reports.
pub fn solve(cube: &Cube) -> Solution {
    if cube.is_solved() {
        return Solution::from_steps(vec![]);
    }

    info!("Solving with the {METHOD}");
    let mut state = cube.state();

    let steps = Stage::ALL
        .into_iter()
        .map(|stage| stage.run(&mut state))
        .collect::<Vec<_>>();
    let solution = Solution::from_steps(steps);

    if state.is_solved() {
        info!(success!("Solved in {} moves"), solution.total_moves);
    } else {
        info!("Stopped after {} moves without solving", solution.total_moves);
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_notation;

    fn scrambled(notation: &str) -> Cube {
        let mut cube = Cube::new();
        cube.apply_notation(notation).unwrap();
        cube
    }

    #[test_log::test]
    fn solved_cube_needs_nothing() {
        let solution = solve(&Cube::new());

        assert!(solution.moves.is_empty());
        assert!(solution.steps.is_empty());
        assert_eq!(solution.total_moves, 0);
        assert_eq!(solution.method, METHOD);
        assert!(!solution.optimized);
        assert!(solution.verify(&Cube::new()));
    }

    #[test_log::test]
    fn single_turn() {
        let cube = scrambled("R");
        let solution = solve(&cube);

        assert!(solution.verify(&cube));
        assert_eq!(solution.notation(), "R R2");
        assert_eq!(solution.steps.len(), 1);
        assert_eq!(solution.steps[0].name, "White Cross");
    }

    #[test_log::test]
    fn trigger_scramble() {
        let cube = scrambled("R U R' U'");
        let solution = solve(&cube);

        assert!(solution.verify(&cube));
        assert!(solution.total_moves > 0 && solution.total_moves < 500);
        assert_eq!(solution.total_moves, solution.moves.len());
    }

    #[test_log::test]
    fn steps_add_up_and_are_never_empty() {
        let cube = scrambled("L D' B2 R F' U2 L2 D");
        let solution = solve(&cube);

        assert!(solution.verify(&cube));
        assert!(solution.steps.iter().all(|step| step.move_count > 0));
        assert!(solution.steps.iter().all(|step| step.move_count == step.moves.len()));
        assert_eq!(
            solution.steps.iter().map(|step| step.move_count).sum::<usize>(),
            solution.total_moves
        );

        let order = solution
            .steps
            .iter()
            .map(|step| {
                Stage::ALL
                    .iter()
                    .position(|stage| stage.name() == step.name)
                    .unwrap()
            })
            .collect::<Vec<_>>();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test_log::test]
    fn input_is_untouched() {
        let cube = scrambled("F2 U' B");
        let before = cube.clone();

        let _ = solve(&cube);
        assert_eq!(cube, before);
    }

    #[test]
    fn each_stage_reaches_its_goal() {
        let mut state = CubeState::solved()
            .apply_all(&parse_notation("D2 F' R U2 B L' D R2 F U' L B2 D'").unwrap());

        for stage in Stage::ALL {
            let _ = stage.run(&mut state);
            assert!(stage.is_done(&state), "{} did not finish", stage.name());
        }
        assert!(state.is_solved());
    }

    #[test]
    fn stage_metadata() {
        assert_eq!(Stage::ALL.len(), 7);
        assert_eq!(Stage::WhiteCross.trigger(), None);
        assert_eq!(Stage::WhiteCorners.trigger(), Some("R U R' U'"));
        assert_eq!(Stage::MiddleLayer.iteration_cap(), 100);
        assert_eq!(Stage::PositionYellowCorners.iteration_cap(), 10);
        for stage in Stage::ALL {
            assert!(stage.is_done(&CubeState::solved()));
        }
    }

    #[test]
    fn solution_json_uses_camel_case() {
        let solution = solve(&scrambled("U"));
        let json = serde_json::to_value(&solution).unwrap();

        assert_eq!(json["totalMoves"], solution.total_moves);
        assert_eq!(json["optimized"], false);
        assert_eq!(json["method"], METHOD);
        assert_eq!(json["steps"][0]["moveCount"], solution.steps[0].move_count);
        assert_eq!(json["moves"][0], "U'");
    }
}
