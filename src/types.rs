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

//! Shared types: error kinds, terminal outcomes, and the solve report.

use std::error::Error;
use std::fmt;

use serde::Serialize;

use crate::geometry::UnitId;

/// Rejected puzzle input, detected while building a board and before any
/// candidate computation takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// Sub-grid dimensions that do not form a solvable geometry.
    Dimensions { box_w: usize, box_h: usize },
    /// Wrong number of rows for the geometry.
    RowCount { found: usize, expected: usize },
    /// A row with the wrong number of cells.
    RowLength { row: usize, found: usize, expected: usize },
    /// A cell value outside `[0, grid]`.
    Value { row: usize, col: usize, value: u8 },
    /// A character that does not encode a cell.
    Character { row: usize, col: usize, ch: char },
    /// The same value twice in one unit.
    Duplicate { value: u8, unit: UnitId },
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MalformedInput::Dimensions { box_w, box_h } => {
                write!(f, "unusable sub-grid dimensions {box_w}x{box_h}")
            }
            MalformedInput::RowCount { found, expected } => {
                write!(f, "expected {expected} rows, found {found}")
            }
            MalformedInput::RowLength { row, found, expected } => {
                write!(f, "row {row} has {found} cells, expected {expected}")
            }
            MalformedInput::Value { row, col, value } => {
                write!(f, "value {value} out of range at ({col}, {row})")
            }
            MalformedInput::Character { row, col, ch } => {
                write!(f, "invalid character {ch:?} at ({col}, {row})")
            }
            MalformedInput::Duplicate { value, unit } => {
                write!(f, "value {value} appears twice in {unit}")
            }
        }
    }
}

impl Error for MalformedInput {}

/// A placement that conflicts with a value already fixed in a sibling unit,
/// or with the cell's own candidate set.
///
/// Surfacing this is always fatal to the solve run: continuing would silently
/// produce an incorrect grid, so the puzzle is reported as inconsistent
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contradiction {
    /// Flat index of the offending cell.
    pub index: usize,
    /// The value whose placement was attempted.
    pub value: u8,
}

impl fmt::Display for Contradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contradiction: value {} cannot be placed at cell {}",
            self.value, self.index
        )
    }
}

impl Error for Contradiction {}

/// Terminal state of a solve run.
///
/// `Stalled` is a defined outcome, not an error: the techniques reached a
/// fixed point (or the round cap) with empty cells remaining, meaning the
/// puzzle needs guessing that this engine deliberately does not do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Solved,
    Stalled,
}

/// How many deductions each technique family contributed.
///
/// Singles count placements; claiming and disjoint subsets count removed
/// candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TechniqueStats {
    pub naked_singles: usize,
    pub hidden_singles: usize,
    pub claiming: usize,
    pub disjoint_subsets: usize,
}

/// The logical depth a solve run had to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum TechniqueLevel {
    /// No deduction was needed (the grid arrived solved).
    None,
    /// Naked/hidden singles only.
    Basic,
    /// Sub-row/sub-column claiming.
    Intermediate,
    /// Disjoint-subset elimination.
    Advanced,
}

/// Result of one solve run: the terminal state, the number of rounds the
/// driver executed, and the per-technique counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub rounds: usize,
    pub stats: TechniqueStats,
}

impl SolveReport {
    /// The puzzle's difficulty as solved: the deepest technique family that
    /// actually acted.
    pub fn difficulty(&self) -> TechniqueLevel {
        let s = &self.stats;
        if s.disjoint_subsets > 0 {
            TechniqueLevel::Advanced
        } else if s.claiming > 0 {
            TechniqueLevel::Intermediate
        } else if s.naked_singles > 0 || s.hidden_singles > 0 {
            TechniqueLevel::Basic
        } else {
            TechniqueLevel::None
        }
    }
}
