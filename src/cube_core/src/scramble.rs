use fastrand::Rng;

use crate::{cube::Cube, moves::Move};

/// `length` random turns, never two in a row on the same face.
pub fn random_scramble(length: usize, rng: &mut Rng) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::with_capacity(length);

    while moves.len() < length {
        let candidate = Move::ALL[rng.usize(..Move::ALL.len())];
        if moves.last().is_some_and(|last| last.face == candidate.face) {
            continue;
        }
        moves.push(candidate);
    }

    moves
}

pub fn scramble_cube(moves: &[Move]) -> Cube {
    let mut cube = Cube::new();
    cube.apply_moves(moves);
    cube
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_the_requested_length_without_repeated_faces() {
        let mut rng = Rng::with_seed(5);

        for length in [0, 1, 25, 100] {
            let moves = random_scramble(length, &mut rng);
            assert_eq!(moves.len(), length);
            assert!(moves.windows(2).all(|pair| pair[0].face != pair[1].face));
        }
    }

    #[test]
    fn seeds_are_reproducible() {
        let a = random_scramble(30, &mut Rng::with_seed(42));
        let b = random_scramble(30, &mut Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn scrambled_cube_matches_the_moves() {
        let moves = random_scramble(25, &mut Rng::with_seed(1));
        let cube = scramble_cube(&moves);

        assert_eq!(cube.state(), Cube::new().state().apply_all(&moves));
    }
}
