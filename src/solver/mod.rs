/*
* Copyright (C) 2026  the sudoku-deduce authors
* This file is part of sudoku-deduce.
*
* sudoku-deduce is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* sudoku-deduce is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with sudoku-deduce.  If not, see <https://www.gnu.org/licenses/>.
*/

//! The propagation driver: applies the technique battery round after round
//! until the board is solved or a fixed point is reached.
//!
//! Every technique is monotone (it only places values or removes candidates),
//! so candidate-set cardinalities strictly decrease on any productive call
//! and the fixed-point loop must terminate. The round cap only guards
//! against implementation bugs breaking that argument.

pub mod claiming;
pub mod singles;
pub mod subsets;

use crate::board::Board;
use crate::geometry::UnitId;
use crate::types::{Contradiction, Outcome, SolveReport, TechniqueStats};

/// Safety cap on driver rounds. Monotonicity means a fixed point is normally
/// detected long before this.
pub const MAX_ROUNDS: usize = 100;

/// Runs the technique battery to a fixed point.
///
/// One round applies, in order: naked singles over every row (rows partition
/// the grid, so every cell is visited once); hidden singles over every row,
/// column, and sub-grid; claiming over every sub-grid, rows then columns;
/// and disjoint-subset elimination for n = 2, 3, 4 over every row, column,
/// and sub-grid.
///
/// Returns the report on `Ok`; a [`Contradiction`] aborts the run and marks
/// the puzzle inconsistent.
pub fn solve(board: &mut Board) -> Result<SolveReport, Contradiction> {
    let mut stats = TechniqueStats::default();
    let grid = board.geometry().grid();

    for round in 1..=MAX_ROUNDS {
        let mut changed = 0;

        for y in 0..grid {
            let n = singles::naked_singles(board, UnitId::row(y))?;
            stats.naked_singles += n;
            changed += n;
        }

        for unit in board.geometry().all_units() {
            let n = singles::hidden_singles(board, unit)?;
            stats.hidden_singles += n;
            changed += n;
        }

        for axis in [claiming::Axis::Rows, claiming::Axis::Cols] {
            for b in 0..grid {
                let n = claiming::claim(board, b, axis);
                stats.claiming += n;
                changed += n;
            }
        }

        for size in 2..=4 {
            for unit in board.geometry().all_units() {
                let n = subsets::eliminate(board, unit, size);
                stats.disjoint_subsets += n;
                changed += n;
            }
        }

        if board.is_solved() {
            return Ok(SolveReport { outcome: Outcome::Solved, rounds: round, stats });
        }
        if changed == 0 {
            return Ok(SolveReport { outcome: Outcome::Stalled, rounds: round, stats });
        }
    }

    Ok(SolveReport { outcome: Outcome::Stalled, rounds: MAX_ROUNDS, stats })
}
