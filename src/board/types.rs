//! Entity model: runes, stones, and the placement grid.

use super::geometry::rotate_cw;

/// Side length of the square placement grid.
pub const GRID_SIZE: i32 = 4;

const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// A grid coordinate. Valid cells are `(x, y)` with both components in
/// `0..GRID_SIZE`; offsets produced by stone vectors may point outside.
pub type Coord = (i32, i32);

/// A scoring target that accumulates boost points up to `max_level`.
///
/// `raw_score` and `current_level` are report fields: every scoring pass
/// rewrites them from scratch, so they never carry search-internal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rune {
    /// Stable label, e.g. `"R1"`.
    pub id: String,
    /// Level cap, immutable after creation.
    pub max_level: u32,
    /// Capped level from the most recent scoring pass.
    pub current_level: u32,
    /// Accumulated boost before capping; may exceed `max_level`.
    pub raw_score: u32,
}

impl Rune {
    pub fn new(id: impl Into<String>, max_level: u32) -> Self {
        Self {
            id: id.into(),
            max_level,
            current_level: 0,
            raw_score: 0,
        }
    }

    /// Boost beyond the cap, wasted but reported.
    pub fn wasted_boost(&self) -> u32 {
        self.raw_score.saturating_sub(self.max_level)
    }
}

/// A single directional boost effect emitted by a stone. Immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoneVector {
    pub dx: i32,
    pub dy: i32,
    pub boost: u32,
}

impl StoneVector {
    pub fn new(dx: i32, dy: i32, boost: u32) -> Self {
        Self { dx, dy, boost }
    }
}

/// An emitter of boost vectors, rotatable in quarter turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stone {
    /// Stable label, e.g. `"K1"`.
    pub id: String,
    base_vectors: Vec<StoneVector>,
    /// Clockwise quarter turns applied to the base vectors, in `0..4`.
    pub rotation: u8,
}

impl Stone {
    pub fn new(id: impl Into<String>, vectors: Vec<StoneVector>) -> Self {
        Self {
            id: id.into(),
            base_vectors: vectors,
            rotation: 0,
        }
    }

    /// The unrotated vector set this stone was built with.
    pub fn base_vectors(&self) -> &[StoneVector] {
        &self.base_vectors
    }

    /// Yields each base vector with the current rotation applied.
    ///
    /// Pure with respect to the stone: calling it twice for the same
    /// `rotation` yields identical offsets, and it allocates nothing.
    pub fn active_vectors(&self) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        self.base_vectors.iter().map(|v| {
            let (dx, dy) = rotate_cw(v.dx, v.dy, self.rotation);
            (dx, dy, v.boost)
        })
    }
}

/// A cell occupant, indexing into [`BoardState::runes`] or
/// [`BoardState::stones`].
///
/// A closed sum type keeps the scoring engine's partition of the grid
/// exhaustive: a cell holds a rune or a stone, never both, never anything
/// else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Rune(usize),
    Stone(usize),
}

/// The partial mapping from grid coordinates to occupants.
///
/// Backed by a fixed array so the per-iteration hot path allocates
/// nothing and snapshotting the best layout is a flat copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Occupant>; CELL_COUNT],
}

impl Grid {
    fn index(pos: Coord) -> Option<usize> {
        let (x, y) = pos;
        if (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y) {
            Some((y * GRID_SIZE + x) as usize)
        } else {
            None
        }
    }

    /// The occupant at `pos`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, pos: Coord) -> Option<Occupant> {
        Self::index(pos).and_then(|i| self.cells[i])
    }

    /// Writes `occupant` at `pos`; `None` clears the cell. Out-of-range
    /// coordinates are ignored.
    pub fn set(&mut self, pos: Coord, occupant: Option<Occupant>) {
        if let Some(i) = Self::index(pos) {
            self.cells[i] = occupant;
        }
    }

    /// Iterates over the occupied cells.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Occupant)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let i = i as i32;
            cell.map(|occ| ((i % GRID_SIZE, i / GRID_SIZE), occ))
        })
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every valid coordinate, in row-major order.
    pub fn all_coords() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| (x, y)))
    }
}

/// A placement of runes and stones on the grid.
///
/// The entity vectors may contain entities that are not currently placed;
/// scoring only considers occupants of the grid, but the report fields of
/// every rune are refreshed on each pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub grid: Grid,
    pub runes: Vec<Rune>,
    pub stones: Vec<Stone>,
}

impl BoardState {
    pub fn new(runes: Vec<Rune>, stones: Vec<Stone>) -> Self {
        Self {
            grid: Grid::default(),
            runes,
            stones,
        }
    }
}
