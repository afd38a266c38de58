//! Simulated-annealing search over board placements.
//!
//! A single-solution trajectory search: the working state is mutated in
//! place, scored, and either adopted (Metropolis criterion) or reverted
//! through a cheap undo token — no per-iteration snapshot is taken. The
//! restart driver runs independent searches from fresh random placements
//! and keeps the global best.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod mutation;
mod runner;

pub use config::SolverConfig;
pub use mutation::{mutate, revert, UndoToken};
pub use runner::{solve, solve_with_restarts};
