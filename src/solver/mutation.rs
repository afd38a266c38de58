//! In-place state perturbation with exact undo.
//!
//! The annealer mutates its working state directly and only snapshots on
//! confirmed improvement, so every mutation must be reversible. The undo
//! token records exactly what changed: the prior rotation, or the two
//! prior occupants of the swapped cells.

use crate::board::{BoardState, Coord, GRID_SIZE, Occupant};
use rand::Rng;

/// Record of one applied mutation, sufficient to reverse it bit-for-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoToken {
    /// Two empty cells were picked; nothing changed.
    Noop,
    /// Stone `stone` was advanced one quarter turn from `prev_rotation`.
    Rotate { stone: usize, prev_rotation: u8 },
    /// The occupants of `a` and `b` were exchanged.
    Swap {
        a: Coord,
        b: Coord,
        occupant_a: Option<Occupant>,
        occupant_b: Option<Occupant>,
    },
}

impl UndoToken {
    /// Whether the mutation left the state untouched. The caller skips
    /// scoring and acceptance for such iterations.
    pub fn is_noop(&self) -> bool {
        matches!(self, UndoToken::Noop)
    }
}

fn random_coord<R: Rng>(rng: &mut R) -> Coord {
    (
        rng.random_range(0..GRID_SIZE),
        rng.random_range(0..GRID_SIZE),
    )
}

/// Applies one random local perturbation to `state`.
///
/// A single uniform draw against `rotation_probability` picks the move:
///
/// - **Rotate**: one uniformly chosen stone advances its rotation by a
///   quarter turn. Falls through to a swap when there are no stones.
/// - **Swap/Move**: two distinct uniformly chosen cells exchange their
///   occupants; moving onto an empty cell and vacating the origin is the
///   degenerate case. Two empty cells yield [`UndoToken::Noop`].
pub fn mutate<R: Rng>(state: &mut BoardState, rng: &mut R, rotation_probability: f64) -> UndoToken {
    if rng.random_range(0.0..1.0) < rotation_probability && !state.stones.is_empty() {
        let idx = rng.random_range(0..state.stones.len());
        let stone = &mut state.stones[idx];
        let prev = stone.rotation;
        stone.rotation = (prev + 1) % 4;
        return UndoToken::Rotate {
            stone: idx,
            prev_rotation: prev,
        };
    }

    let a = random_coord(rng);
    let mut b = random_coord(rng);
    while b == a {
        b = random_coord(rng);
    }

    let occupant_a = state.grid.get(a);
    let occupant_b = state.grid.get(b);
    if occupant_a.is_none() && occupant_b.is_none() {
        return UndoToken::Noop;
    }

    state.grid.set(a, occupant_b);
    state.grid.set(b, occupant_a);
    UndoToken::Swap {
        a,
        b,
        occupant_a,
        occupant_b,
    }
}

/// Reverses a mutation, restoring the exact pre-mutation state.
pub fn revert(state: &mut BoardState, undo: UndoToken) {
    match undo {
        UndoToken::Noop => {}
        UndoToken::Rotate {
            stone,
            prev_rotation,
        } => {
            state.stones[stone].rotation = prev_rotation;
        }
        UndoToken::Swap {
            a,
            b,
            occupant_a,
            occupant_b,
        } => {
            state.grid.set(a, occupant_a);
            state.grid.set(b, occupant_b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Rune, Stone, StoneVector};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_state() -> BoardState {
        let mut state = BoardState::new(
            vec![Rune::new("R1", 10), Rune::new("R2", 6)],
            vec![Stone::new("K1", vec![StoneVector::new(1, 0, 2)])],
        );
        state.grid.set((0, 0), Some(Occupant::Rune(0)));
        state.grid.set((3, 3), Some(Occupant::Rune(1)));
        state.grid.set((1, 2), Some(Occupant::Stone(0)));
        state
    }

    #[test]
    fn test_rotation_mutation_and_revert() {
        let mut state = sample_state();
        let mut rng = StdRng::seed_from_u64(1);
        // probability 1.0 forces the rotate branch
        let undo = mutate(&mut state, &mut rng, 1.0);
        match undo {
            UndoToken::Rotate {
                stone,
                prev_rotation,
            } => {
                assert_eq!(stone, 0);
                assert_eq!(prev_rotation, 0);
                assert_eq!(state.stones[0].rotation, 1);
            }
            other => panic!("expected rotation, got {other:?}"),
        }
        revert(&mut state, undo);
        assert_eq!(state.stones[0].rotation, 0);
    }

    #[test]
    fn test_rotation_wraps_after_four() {
        let mut state = sample_state();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..4 {
            mutate(&mut state, &mut rng, 1.0);
        }
        assert_eq!(state.stones[0].rotation, 0);
    }

    #[test]
    fn test_rotation_falls_back_to_swap_without_stones() {
        let mut state = BoardState::new(vec![Rune::new("R1", 10)], vec![]);
        state.grid.set((0, 0), Some(Occupant::Rune(0)));
        let mut rng = StdRng::seed_from_u64(3);
        // probability 1.0 still cannot rotate
        let undo = mutate(&mut state, &mut rng, 1.0);
        assert!(matches!(undo, UndoToken::Swap { .. } | UndoToken::Noop));
    }

    #[test]
    fn test_swap_mutation_exchanges_and_reverts() {
        let mut state = sample_state();
        let before = state.clone();
        let mut rng = StdRng::seed_from_u64(7);
        // probability 0.0 forces the swap branch
        let undo = mutate(&mut state, &mut rng, 0.0);
        if let UndoToken::Swap {
            a,
            b,
            occupant_a,
            occupant_b,
        } = undo
        {
            assert_ne!(a, b);
            assert_eq!(state.grid.get(a), occupant_b);
            assert_eq!(state.grid.get(b), occupant_a);
        }
        revert(&mut state, undo);
        assert_eq!(state, before);
    }

    #[test]
    fn test_swap_preserves_occupant_count() {
        let mut state = sample_state();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            mutate(&mut state, &mut rng, 0.0);
            assert_eq!(state.grid.occupied_count(), 3);
        }
    }

    #[test]
    fn test_two_empty_cells_is_reported_noop() {
        // Entities exist but nothing is placed, so every swap picks two
        // empty cells.
        let mut state = BoardState::new(
            vec![Rune::new("R1", 10)],
            vec![Stone::new("K1", vec![StoneVector::new(1, 0, 2)])],
        );
        let before = state.clone();
        let score_before = state.clone().evaluate();
        let mut rng = StdRng::seed_from_u64(5);
        let undo = mutate(&mut state, &mut rng, 0.0);
        assert!(undo.is_noop());
        assert_eq!(state, before);
        assert_eq!(state.clone().evaluate(), score_before);
    }

    #[test]
    fn test_many_random_mutations_all_revert_exactly() {
        let mut state = sample_state();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let before = state.clone();
            let undo = mutate(&mut state, &mut rng, 0.4);
            revert(&mut state, undo);
            assert_eq!(state, before);
        }
    }
}
