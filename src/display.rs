//! Report adapter: plain-text rendering of a solved board.

use crate::board::{BoardState, Occupant, GRID_SIZE};
use std::fmt::Write;

const ROTATION_ARROWS: [char; 4] = ['^', '>', 'v', '<'];

/// Renders the board as text: total level sum, a per-rune report, and the
/// grid with `y = 3` at the top. Re-evaluates the board first so the rune
/// report fields are current.
pub fn render_board(state: &mut BoardState) -> String {
    state.evaluate();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "=== Solution (total levels: {}) ===",
        state.total_levels()
    );

    let _ = writeln!(out, "Runes:");
    for rune in &state.runes {
        let wasted = rune.wasted_boost();
        let note = if wasted > 0 {
            format!(" (+{wasted} wasted)")
        } else {
            String::new()
        };
        let _ = writeln!(
            out,
            "  {}: {}/{}{}",
            rune.id, rune.current_level, rune.max_level, note
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(45));

    for y in (0..GRID_SIZE).rev() {
        let _ = write!(out, "y={y} |");
        for x in 0..GRID_SIZE {
            let cell = match state.grid.get((x, y)) {
                Some(Occupant::Rune(i)) => {
                    let rune = &state.runes[i];
                    format!("{}({})", rune.id, rune.current_level)
                }
                Some(Occupant::Stone(i)) => {
                    let stone = &state.stones[i];
                    let arrow = ROTATION_ARROWS[(stone.rotation % 4) as usize];
                    format!("{} {}", stone.id, arrow)
                }
                None => ".".to_string(),
            };
            let _ = write!(out, " {cell:<8}|");
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "      x=0      x=1      x=2      x=3");
    let _ = writeln!(out);
    let _ = writeln!(out, "Legend: Kn ^ unrotated, > 90°, v 180°, < 270° clockwise");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Rune, Stone, StoneVector};

    #[test]
    fn test_render_reports_levels_and_placements() {
        let mut state = BoardState::new(
            vec![Rune::new("R1", 10)],
            vec![Stone::new("K1", vec![StoneVector::new(1, 0, 5)])],
        );
        state.grid.set((0, 0), Some(Occupant::Stone(0)));
        state.grid.set((1, 0), Some(Occupant::Rune(0)));

        let rendered = render_board(&mut state);
        assert!(rendered.contains("total levels: 5"));
        assert!(rendered.contains("R1: 5/10"));
        assert!(rendered.contains("R1(5)"));
        assert!(rendered.contains("K1 ^"));
    }

    #[test]
    fn test_render_notes_wasted_boost() {
        let mut state = BoardState::new(
            vec![Rune::new("R1", 3)],
            vec![Stone::new("K1", vec![StoneVector::new(1, 0, 10)])],
        );
        state.grid.set((0, 0), Some(Occupant::Stone(0)));
        state.grid.set((1, 0), Some(Occupant::Rune(0)));

        let rendered = render_board(&mut state);
        assert!(rendered.contains("R1: 3/3 (+7 wasted)"));
    }

    #[test]
    fn test_render_shows_rotation_arrow() {
        let mut state = BoardState::new(
            vec![],
            vec![Stone::new("K1", vec![StoneVector::new(1, 0, 2)])],
        );
        state.stones[0].rotation = 2;
        state.grid.set((2, 3), Some(Occupant::Stone(0)));

        let rendered = render_board(&mut state);
        assert!(rendered.contains("K1 v"));
    }

    #[test]
    fn test_render_empty_cells() {
        let mut state = BoardState::new(vec![], vec![]);
        let rendered = render_board(&mut state);
        assert!(rendered.contains("total levels: 0"));
        assert!(rendered.contains("y=3"));
        assert!(rendered.contains("y=0"));
    }
}
