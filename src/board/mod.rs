//! Board data model and scoring.
//!
//! Entities are owned by the [`BoardState`]: runes and stones live in
//! plain vectors, and the [`Grid`] maps coordinates to [`Occupant`]
//! indices into those vectors. Stones act on runes purely through their
//! relative grid position and rotation; there is no blocking or range
//! limit beyond the vector set itself.

mod geometry;
mod scoring;
mod types;

pub use geometry::rotate_cw;
pub use types::{BoardState, Coord, Grid, Occupant, Rune, Stone, StoneVector, GRID_SIZE};
