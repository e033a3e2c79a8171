use cube_core::{Color, CubeState, Face, Solution};
use itertools::Itertools;
use owo_colors::OwoColorize;

fn paint(color: Color) -> String {
    let letter = color.letter();

    match color {
        Color::White => letter.white().bold().to_string(),
        Color::Yellow => letter.yellow().bold().to_string(),
        Color::Red => letter.red().bold().to_string(),
        Color::Orange => letter.truecolor(255, 140, 0).bold().to_string(),
        Color::Blue => letter.blue().bold().to_string(),
        Color::Green => letter.green().bold().to_string(),
    }
}

/// The unfolded net, with each sticker in its own color when `color` is set.
pub fn net(state: &CubeState, color: bool) -> String {
    if !color {
        return state.to_string();
    }

    let row = |face: Face, row: usize| {
        state[face][row * 3..row * 3 + 3]
            .iter()
            .map(|&sticker| paint(sticker))
            .join(" ")
    };
    let pad = " ".repeat(6);

    let top = (0..3).map(|r| format!("{pad}{}", row(Face::U, r)));
    let band = (0..3).map(|r| {
        [Face::L, Face::F, Face::R, Face::B]
            .into_iter()
            .map(|face| row(face, r))
            .join(" ")
    });
    let bottom = (0..3).map(|r| format!("{pad}{}", row(Face::D, r)));

    top.chain(band).chain(bottom).join("\n")
}

pub fn solution(solution: &Solution, color: bool) -> String {
    let mut lines = Vec::with_capacity(solution.steps.len() * 3 + 1);

    for step in &solution.steps {
        let heading = format!("{} ({} moves)", step.name, step.move_count);
        if color {
            lines.push(heading.bold().to_string());
            lines.push(step.description.dimmed().to_string());
        } else {
            lines.push(heading);
            lines.push(step.description.clone());
        }
        lines.push(format!("  {}", step.moves.iter().join(" ")));
    }

    lines.push(format!("{}: {} moves", solution.method, solution.total_moves));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{Cube, solve};

    #[test]
    fn plain_net_is_the_display_form() {
        let state = CubeState::solved();
        assert_eq!(net(&state, false), state.to_string());
    }

    #[test]
    fn colored_net_keeps_the_letters() {
        let colored = net(&CubeState::solved(), true);

        assert!(colored.contains('\u{1b}'));
        assert_eq!(colored.lines().count(), 9);
        assert_eq!(colored.matches('G').count(), 9);
    }

    #[test]
    fn plain_solution_listing() {
        let mut cube = Cube::new();
        cube.apply_notation("R").unwrap();

        let text = solution(&solve(&cube), false);
        assert!(text.starts_with("White Cross (2 moves)"));
        assert!(text.contains("  R R2"));
        assert!(text.ends_with("2 moves"));
    }
}
