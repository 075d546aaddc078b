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

//! A logical Sudoku solver that uses human-like deduction only.
//!
//! The engine narrows per-cell candidate sets with a fixed battery of
//! techniques applied to a fixed point: naked singles, hidden singles,
//! sub-row/sub-column claiming, and generalized disjoint-subset elimination.
//! It never guesses: a puzzle beyond the battery's reach is reported as
//! [`Outcome::Stalled`] with its remaining candidates intact.
//!
//! ```
//! use sudoku_deduce::{Outcome, solve};
//!
//! let mut board = "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!     .parse()
//!     .unwrap();
//! let report = solve(&mut board).unwrap();
//! assert_eq!(report.outcome, Outcome::Solved);
//! ```

pub mod board;
pub mod geometry;
pub mod solver;
pub mod types;

pub use board::Board;
pub use geometry::{GEOMETRY_9X9, Geometry, UnitId, UnitKind};
pub use solver::{MAX_ROUNDS, solve};
pub use types::{
    Contradiction, MalformedInput, Outcome, SolveReport, TechniqueLevel, TechniqueStats,
};
