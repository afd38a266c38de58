//! Annealing loop and restart driver.

use super::config::SolverConfig;
use super::mutation::{mutate, revert};
use crate::board::{BoardState, Grid, Occupant, Rune, Stone};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Places every entity at a distinct shuffled coordinate and gives each
/// stone a random initial rotation.
///
/// If entities outnumber cells, the excess stays unplaced; an occupied
/// cell is never overwritten.
fn create_initial_state<R: Rng>(
    runes: Vec<Rune>,
    stones: Vec<Stone>,
    rng: &mut R,
) -> BoardState {
    let mut positions: Vec<_> = Grid::all_coords().collect();
    positions.shuffle(rng);

    let mut state = BoardState::new(runes, stones);
    for stone in &mut state.stones {
        stone.rotation = rng.random_range(0..4u8);
    }

    let mut slots = positions.into_iter();
    for i in 0..state.runes.len() {
        let Some(pos) = slots.next() else { break };
        state.grid.set(pos, Some(Occupant::Rune(i)));
    }
    for i in 0..state.stones.len() {
        let Some(pos) = slots.next() else { break };
        state.grid.set(pos, Some(Occupant::Stone(i)));
    }
    state
}

/// Runs one simulated-annealing search over the given entities.
///
/// The working state is perturbed in place each iteration; an improving
/// move is always accepted, a worsening one with Metropolis probability
/// `exp(delta / temperature)`. Rejected moves are reversed through the
/// mutation's undo token, and the best layout seen is snapshotted as
/// grid plus stone rotations. A no-op mutation (two empty cells swapped)
/// skips scoring and acceptance, but temperature still cools.
///
/// Returns the best state found and its score; the returned state's rune
/// report fields are refreshed to match.
///
/// # Panics
///
/// Panics if the configuration is invalid (call [`SolverConfig::validate`]
/// first to get a descriptive error).
pub fn solve(runes: Vec<Rune>, stones: Vec<Stone>, config: &SolverConfig) -> (BoardState, f64) {
    config.validate().expect("invalid SolverConfig");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut state = create_initial_state(runes, stones, &mut rng);
    let mut current_score = state.evaluate();

    let mut best_grid = state.grid.clone();
    let mut best_rotations: Vec<u8> = state.stones.iter().map(|s| s.rotation).collect();
    let mut best_score = current_score;

    let mut temperature = config.initial_temperature;

    for _ in 0..config.iterations {
        let undo = mutate(&mut state, &mut rng, config.rotation_probability);

        if !undo.is_noop() {
            let new_score = state.evaluate();

            let accept = if new_score > current_score {
                true
            } else {
                let delta = new_score - current_score;
                rng.random_range(0.0..1.0) < (delta / temperature).exp()
            };

            if accept {
                current_score = new_score;
                if current_score > best_score {
                    best_score = current_score;
                    best_grid = state.grid.clone();
                    for (slot, stone) in best_rotations.iter_mut().zip(&state.stones) {
                        *slot = stone.rotation;
                    }
                }
            } else {
                revert(&mut state, undo);
            }
        }

        temperature = (temperature * config.cooling_rate).max(config.min_temperature);
    }

    // Restore the best snapshot and refresh the rune report fields so the
    // returned board matches the returned score.
    state.grid = best_grid;
    for (stone, rotation) in state.stones.iter_mut().zip(&best_rotations) {
        stone.rotation = *rotation;
    }
    let best_score = state.evaluate();

    (state, best_score)
}

/// Runs [`solve`] `num_restarts` times from fresh random placements and
/// returns the best result; ties keep the earliest restart.
///
/// Each restart gets fresh entity copies (levels reset, rotation zeroed)
/// and a private RNG whose seed derives from the configured base seed and
/// the restart index, so no state leaks between restarts and a seeded run
/// produces the same answer for any `workers` value. With `workers > 1`
/// the restarts fan out across the rayon thread pool.
///
/// # Panics
///
/// Panics if the configuration is invalid.
pub fn solve_with_restarts(
    runes: &[Rune],
    stones: &[Stone],
    config: &SolverConfig,
) -> (BoardState, f64) {
    config.validate().expect("invalid SolverConfig");

    let run_restart = |index: usize| {
        let fresh_runes: Vec<Rune> = runes
            .iter()
            .map(|r| Rune::new(r.id.clone(), r.max_level))
            .collect();
        let fresh_stones: Vec<Stone> = stones
            .iter()
            .map(|s| Stone::new(s.id.clone(), s.base_vectors().to_vec()))
            .collect();

        let mut restart_config = config.clone();
        restart_config.seed = config.seed.map(|s| s.wrapping_add(index as u64));

        solve(fresh_runes, fresh_stones, &restart_config)
    };

    let results: Vec<(BoardState, f64)> = if config.workers > 1 {
        (0..config.num_restarts)
            .into_par_iter()
            .map(run_restart)
            .collect()
    } else {
        (0..config.num_restarts).map(run_restart).collect()
    };

    let mut best: Option<(BoardState, f64)> = None;
    for (state, score) in results {
        if best.as_ref().map_or(true, |(_, b)| score > *b) {
            best = Some((state, score));
        }
    }
    best.expect("num_restarts is at least 1")
}
