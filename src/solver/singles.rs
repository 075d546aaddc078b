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

//! Naked and hidden singles: the placing techniques.

use crate::board::Board;
use crate::geometry::UnitId;
use crate::types::Contradiction;

/// Places every cell of the unit left with exactly one candidate.
///
/// Each placement propagates through [`Board::place`], so a placement early
/// in the unit can create (and then resolve) further naked singles later in
/// the same pass. Returns the number of placements.
pub fn naked_singles(board: &mut Board, unit: UnitId) -> Result<usize, Contradiction> {
    let cells = board.geometry().unit_cells(unit).to_vec();
    let mut placed = 0;

    for index in cells {
        let mask = board.candidates(index);
        if board.cell(index) == 0 && mask.count_ones() == 1 {
            let value = (mask.trailing_zeros() + 1) as u8;
            board.place(index, value)?;
            placed += 1;
        }
    }
    Ok(placed)
}

/// Places every value that fits only one cell of the unit.
///
/// Values already placed in the unit are skipped via the unit's placed-value
/// mask rather than by scanning for their absence. Returns the number of
/// placements.
pub fn hidden_singles(board: &mut Board, unit: UnitId) -> Result<usize, Contradiction> {
    let cells = board.geometry().unit_cells(unit).to_vec();
    let grid = board.geometry().grid() as u8;
    let mut placed = 0;

    for value in 1..=grid {
        let bit = 1u32 << (value - 1);
        // Re-read per value: placements inside this loop extend the mask.
        if board.placed_in(unit) & bit != 0 {
            continue;
        }

        let mut count = 0;
        let mut found = None;
        for &index in &cells {
            if board.cell(index) == 0 && board.candidates(index) & bit != 0 {
                count += 1;
                found = Some(index);
                if count > 1 {
                    break;
                }
            }
        }

        if let (1, Some(index)) = (count, found) {
            board.place(index, value)?;
            placed += 1;
        }
    }
    Ok(placed)
}
