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

//! Sub-row / sub-column claiming.
//!
//! A sub-grid splits into `box_h` sub-rows (or `box_w` sub-columns). A value
//! whose candidates within the sub-grid all sit on one sub-row must be placed
//! on that sub-row, so it cannot appear anywhere else in the parent row
//! outside the sub-grid. Claimed values are found per sub-row as the
//! set-difference of its candidate union against the union of the other
//! sub-rows.

use crate::board::Board;

/// Which way a sub-grid is partitioned for claiming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

/// Applies claiming to one sub-grid along one axis, removing claimed values
/// from the parent line outside the sub-grid. Returns the number of removed
/// candidates.
///
/// Pure elimination: this technique never places a value, so it cannot
/// contradict.
pub fn claim(board: &mut Board, sub_grid: usize, axis: Axis) -> usize {
    let geom = board.geometry();
    let grid = geom.grid();
    let (box_w, box_h) = (geom.box_w(), geom.box_h());
    let boxes_per_row = grid / box_w;
    let (bx, by) = (sub_grid % boxes_per_row, sub_grid / boxes_per_row);
    let (x0, y0) = (bx * box_w, by * box_h);

    // Candidate union of each lane (sub-row or sub-column) of the sub-grid.
    let lanes = match axis {
        Axis::Rows => box_h,
        Axis::Cols => box_w,
    };
    let mut unions = vec![0u32; lanes];
    for (lane, union) in unions.iter_mut().enumerate() {
        match axis {
            Axis::Rows => {
                for dx in 0..box_w {
                    *union |= board.candidates((y0 + lane) * grid + x0 + dx);
                }
            }
            Axis::Cols => {
                for dy in 0..box_h {
                    *union |= board.candidates((y0 + dy) * grid + x0 + lane);
                }
            }
        }
    }

    let mut removed = 0;
    for lane in 0..lanes {
        let others = unions
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != lane)
            .fold(0u32, |acc, (_, &u)| acc | u);
        let claimed = unions[lane] & !others;
        if claimed == 0 {
            continue;
        }

        // Strip claimed values from the parent line outside this sub-grid.
        match axis {
            Axis::Rows => {
                let y = y0 + lane;
                for x in (0..grid).filter(|x| x / box_w != bx) {
                    removed += board.remove_candidates(y * grid + x, claimed);
                }
            }
            Axis::Cols => {
                let x = x0 + lane;
                for y in (0..grid).filter(|y| y / box_h != by) {
                    removed += board.remove_candidates(y * grid + x, claimed);
                }
            }
        }
    }
    removed
}
