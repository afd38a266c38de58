//! Simulated-annealing layout optimizer for runes and boost stones.
//!
//! Runes accumulate boost points up to a per-rune cap; stones emit
//! directional boost vectors and can be rotated in 90° steps. The solver
//! searches for the placement of both on a 4×4 grid that maximizes a
//! strict priority hierarchy over rune levels, using simulated annealing
//! with independent random restarts.
//!
//! # Architecture
//!
//! - [`board`]: the entity model (runes, stones, grid) and the scoring
//!   engine that reduces a placement to a single comparable scalar.
//! - [`solver`]: the mutation engine (in-place perturbation with cheap
//!   undo), the annealing loop, and the multi-restart driver.
//! - [`parse`]: the input adapter turning human-typed level and vector
//!   strings into entity collections.
//! - [`display`]: the report adapter rendering a solved board as text.
//!
//! # Usage
//!
//! ```
//! use rune_solver::parse::parse_input;
//! use rune_solver::solver::{solve_with_restarts, SolverConfig};
//!
//! let (runes, stones) = parse_input("10 6", "(1, 0, 2) (0, 1, 3)").unwrap();
//! let config = SolverConfig::default()
//!     .with_iterations(5_000)
//!     .with_num_restarts(2)
//!     .with_seed(42);
//! let (best, score) = solve_with_restarts(&runes, &stones, &config);
//! assert!(score >= 0.0);
//! assert_eq!(best.runes.len(), 2);
//! ```

pub mod board;
pub mod display;
pub mod parse;
pub mod solver;
