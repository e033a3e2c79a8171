use cube_core::{
    Color, Cube, CubeError, Face, METHOD, Stage, StickerSheet, format_notation,
    random_scramble, scramble_cube, solve, validate,
};
use fastrand::Rng;
use log::info;

fn replay(scramble: &str, solution: &cube_core::Solution) -> Cube {
    let mut cube = Cube::new();
    cube.apply_notation(scramble).unwrap();
    cube.apply_moves(&solution.moves);
    cube
}

#[test_log::test]
fn test_single_face_scramble() {
    let mut cube = Cube::new();
    cube.apply_notation("R").unwrap();

    let solution = solve(&cube);
    assert!(replay("R", &solution).is_solved());
    assert_eq!(solution.method, METHOD);
}

#[test_log::test]
fn test_sexy_move_scramble() {
    let mut cube = Cube::new();
    cube.apply_notation("R U R' U'").unwrap();

    let solution = solve(&cube);
    assert!(replay("R U R' U'", &solution).is_solved());
    assert!(solution.total_moves > 0);
    assert!(solution.total_moves < 500);
}

#[test_log::test]
fn test_random_scrambles() {
    let mut rng = Rng::with_seed(2024);

    for _ in 0..40 {
        let scramble = random_scramble(25, &mut rng);
        let cube = scramble_cube(&scramble);
        let solution = solve(&cube);

        info!(
            "{} -> {} moves",
            format_notation(&scramble),
            solution.total_moves
        );
        assert!(
            solution.verify(&cube),
            "failed to solve {}",
            format_notation(&scramble)
        );
        assert!(solution.steps.iter().all(|step| !step.moves.is_empty()));
    }
}

#[test_log::test]
fn test_solve_after_json_round_trip() {
    let cube = scramble_cube(&random_scramble(25, &mut Rng::with_seed(9)));
    let restored = Cube::from_json(&cube.to_json().unwrap()).unwrap();
    assert_eq!(restored, cube);

    let solution = solve(&restored);
    assert!(solution.verify(&cube));
}

#[test_log::test]
fn test_twisted_corner_stops_without_solving() {
    // Counts and centers are fine, but the UFR corner is twisted in place.
    let mut sheet = StickerSheet::from(Cube::new().state());
    sheet.face_mut(Face::U).unwrap()[8] = Color::Green.into();
    sheet.face_mut(Face::F).unwrap()[2] = Color::Orange.into();
    sheet.face_mut(Face::R).unwrap()[0] = Color::Yellow.into();

    let cube = Cube::from_sheet(sheet).unwrap();
    let solution = solve(&cube);
    info!("twisted corner -> {} moves", solution.total_moves);

    // Cross and corners count their cap per piece, no step is longer than 16.
    let bound = Stage::ALL
        .iter()
        .map(|stage| match stage {
            Stage::WhiteCross | Stage::WhiteCorners => stage.iteration_cap() * 4,
            _ => stage.iteration_cap(),
        })
        .sum::<usize>()
        * 16;

    assert!(!solution.verify(&cube));
    assert!(solution.total_moves < bound);
    assert_eq!(solution.total_moves, solution.moves.len());
}

#[test]
fn test_state_is_independent_of_the_cube() {
    let mut cube = Cube::new();
    let snapshot = cube.state();

    cube.apply_notation("F R").unwrap();
    assert!(snapshot.is_solved());
    assert!(!cube.is_solved());
}

#[test]
fn test_color_count_errors() {
    let mut sheet = StickerSheet::from(Cube::new().state());
    sheet.face_mut(Face::U).unwrap()[0] = Color::White.into();

    let result = validate(&sheet);
    assert!(!result.valid);
    assert!(result.errors.iter().any(|error| error.contains('W')));
    assert!(result.errors.iter().any(|error| error.contains('Y')));

    match Cube::from_sheet(sheet) {
        Err(CubeError::InvalidState(errors)) => assert_eq!(errors, result.errors),
        other => panic!("expected the sheet to be rejected, got {other:?}"),
    }
}

#[test]
fn test_illegal_json_is_rejected() {
    let json = Cube::new().to_json().unwrap().replace(r#""G""#, r#""B""#);
    assert!(matches!(
        Cube::from_json(&json),
        Err(CubeError::InvalidState(_))
    ));
}
