//! Scoring engine.
//!
//! Reduces a placement to a single scalar the annealer can compare. The
//! score is a weighted sum engineered as a strict hierarchy: each tier's
//! weight dominates everything the lower tiers can add at realistic
//! magnitudes, so comparisons behave lexicographically while staying a
//! plain `f64`.

use super::types::{BoardState, Occupant};

impl BoardState {
    /// Scores the current placement.
    ///
    /// Rewrites `raw_score` and `current_level` on every rune as a side
    /// effect; both are pure functions of the grid and stone rotations,
    /// so re-evaluating an unchanged board is idempotent.
    ///
    /// Tiers, highest priority first:
    ///
    /// 1. level of the flagship rune (highest `max_level` present), ×100
    /// 2. sum of all capped levels, ×1
    /// 3. non-flagship runes that reached their own cap, ×0.1
    /// 4. runes with a positive even level, ×0.01
    ///
    /// An empty grid or an empty rune collection scores 0.
    pub fn evaluate(&mut self) -> f64 {
        let BoardState { grid, runes, stones } = self;

        for rune in runes.iter_mut() {
            rune.raw_score = 0;
        }

        // Scatter boosts from every placed stone onto placed runes.
        // Contributions are additive, so iteration order is irrelevant.
        for ((sx, sy), occupant) in grid.occupied() {
            let Occupant::Stone(stone_idx) = occupant else {
                continue;
            };
            for (dx, dy, boost) in stones[stone_idx].active_vectors() {
                if let Some(Occupant::Rune(rune_idx)) = grid.get((sx + dx, sy + dy)) {
                    runes[rune_idx].raw_score += boost;
                }
            }
        }

        let flagship_max = runes.iter().map(|r| r.max_level).max().unwrap_or(0);

        let mut flagship_level = 0u32;
        let mut total_levels = 0u32;
        let mut maxed_count = 0u32;
        let mut even_count = 0u32;

        for rune in runes.iter_mut() {
            let level = rune.raw_score.min(rune.max_level);
            rune.current_level = level;
            total_levels += level;

            if rune.max_level == flagship_max {
                flagship_level = flagship_level.max(level);
            } else if level == rune.max_level {
                maxed_count += 1;
            }

            if level > 0 && level % 2 == 0 {
                even_count += 1;
            }
        }

        f64::from(flagship_level) * 100.0
            + f64::from(total_levels)
            + f64::from(maxed_count) * 0.1
            + f64::from(even_count) * 0.01
    }

    /// Plain integer sum of capped rune levels, for reporting only.
    pub fn total_levels(&self) -> u32 {
        self.runes
            .iter()
            .map(|r| r.raw_score.min(r.max_level))
            .sum()
    }
}
