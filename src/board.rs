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

//! The board: placed values, candidate masks, and placed-value sets.
//!
//! All per-cell state of a solve run lives here. Candidate sets are `u32`
//! bitmasks (bit `v - 1` for value `v`); the three placed-value masks per
//! row, column, and sub-grid seed the candidate sets and let the techniques
//! skip values a unit already contains.

use std::fmt;
use std::str::FromStr;

use crate::geometry::{GEOMETRY_9X9, Geometry, UnitId, UnitKind};
use crate::types::{Contradiction, MalformedInput};

/// An N×N grid of cells with per-cell candidate masks.
///
/// Invariants held at all times: a placed cell's candidate mask is `0`; an
/// empty cell's mask never contains a value already placed in its row,
/// column, or sub-grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geom: Geometry,
    /// Placed values, row-major, `0` for an empty cell.
    cells: Vec<u8>,
    /// Candidate mask per cell; `0` once the cell is filled.
    candidates: Vec<u32>,
    row_placed: Vec<u32>,
    col_placed: Vec<u32>,
    sub_grid_placed: Vec<u32>,
}

impl Board {
    /// Builds a board from a row-major grid of values in `[0, grid]`,
    /// `0` meaning blank.
    ///
    /// Dimension, range, and in-unit duplicate checks all run before any
    /// candidate mask is computed; a rejected grid leaves no partial state
    /// behind.
    pub fn from_rows(geometry: Geometry, rows: &[Vec<u8>]) -> Result<Self, MalformedInput> {
        let grid = geometry.grid();
        if rows.len() != grid {
            return Err(MalformedInput::RowCount { found: rows.len(), expected: grid });
        }

        let mut board = Board {
            cells: vec![0; geometry.cell_count()],
            candidates: vec![0; geometry.cell_count()],
            row_placed: vec![0; grid],
            col_placed: vec![0; grid],
            sub_grid_placed: vec![0; grid],
            geom: geometry,
        };

        // First pass: register placed values, rejecting duplicates within a
        // unit. No candidate computation happens until the grid is known to
        // be well-formed.
        for (y, row) in rows.iter().enumerate() {
            if row.len() != grid {
                return Err(MalformedInput::RowLength { row: y, found: row.len(), expected: grid });
            }
            for (x, &value) in row.iter().enumerate() {
                if value as usize > grid {
                    return Err(MalformedInput::Value { row: y, col: x, value });
                }
                if value == 0 {
                    continue;
                }
                let index = board.geom.index(x, y);
                let b = board.geom.sub_grid_of(index);
                let bit = 1u32 << (value - 1);
                if board.row_placed[y] & bit != 0 {
                    return Err(MalformedInput::Duplicate { value, unit: UnitId::row(y) });
                }
                if board.col_placed[x] & bit != 0 {
                    return Err(MalformedInput::Duplicate { value, unit: UnitId::col(x) });
                }
                if board.sub_grid_placed[b] & bit != 0 {
                    return Err(MalformedInput::Duplicate { value, unit: UnitId::sub_grid(b) });
                }
                board.cells[index] = value;
                board.row_placed[y] |= bit;
                board.col_placed[x] |= bit;
                board.sub_grid_placed[b] |= bit;
            }
        }

        // Second pass: candidate mask of every empty cell is the full value
        // range minus everything placed in its row, column, and sub-grid.
        let full = board.geom.full_mask();
        for index in 0..board.geom.cell_count() {
            if board.cells[index] == 0 {
                let placed = board.row_placed[board.geom.row_of(index)]
                    | board.col_placed[board.geom.col_of(index)]
                    | board.sub_grid_placed[board.geom.sub_grid_of(index)];
                board.candidates[index] = full & !placed;
            }
        }

        Ok(board)
    }

    /// Fixes `value` in the cell at `index` and strips it from the candidate
    /// mask of every peer.
    ///
    /// Re-placing the value a cell already holds is a no-op and returns
    /// `Ok(false)`. Placing over a different value, placing a value already
    /// fixed in a sibling unit, or placing a value the cell's candidate mask
    /// excludes is a [`Contradiction`].
    pub fn place(&mut self, index: usize, value: u8) -> Result<bool, Contradiction> {
        if self.cells[index] == value {
            return Ok(false);
        }
        if self.cells[index] != 0 || value == 0 || value as usize > self.geom.grid() {
            return Err(Contradiction { index, value });
        }

        let bit = 1u32 << (value - 1);
        let (y, x) = (self.geom.row_of(index), self.geom.col_of(index));
        let b = self.geom.sub_grid_of(index);
        if (self.row_placed[y] | self.col_placed[x] | self.sub_grid_placed[b]) & bit != 0 {
            return Err(Contradiction { index, value });
        }
        if self.candidates[index] & bit == 0 {
            return Err(Contradiction { index, value });
        }

        self.cells[index] = value;
        self.candidates[index] = 0;
        self.row_placed[y] |= bit;
        self.col_placed[x] |= bit;
        self.sub_grid_placed[b] |= bit;
        let Board { geom, candidates, .. } = self;
        for &peer in geom.peers(index) {
            candidates[peer] &= !bit;
        }
        Ok(true)
    }

    /// Removes every value of `mask` from the cell's candidate mask,
    /// returning how many candidates were actually present and removed.
    ///
    /// Removing candidates a cell does not have is a tolerated no-op; only
    /// placements can contradict.
    pub fn remove_candidates(&mut self, index: usize, mask: u32) -> usize {
        let removed = self.candidates[index] & mask;
        if removed != 0 {
            self.candidates[index] &= !mask;
        }
        removed.count_ones() as usize
    }

    /// True once every cell holds a value.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// The placed value at `index`, `0` if empty.
    pub fn cell(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Candidate mask of the cell at `index`.
    pub fn candidates(&self, index: usize) -> u32 {
        self.candidates[index]
    }

    /// Remaining candidates of a cell as values, ascending.
    pub fn candidate_values(&self, index: usize) -> Vec<u8> {
        let mask = self.candidates[index];
        (1..=self.geom.grid() as u8)
            .filter(|&v| mask & (1 << (v - 1)) != 0)
            .collect()
    }

    /// Mask of values already placed in a unit.
    pub fn placed_in(&self, unit: UnitId) -> u32 {
        match unit.kind {
            UnitKind::Row => self.row_placed[unit.index],
            UnitKind::Col => self.col_placed[unit.index],
            UnitKind::SubGrid => self.sub_grid_placed[unit.index],
        }
    }

    /// The board's geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.geom
    }

    /// The grid as row-major rows of values, `0` for cells still empty.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let grid = self.geom.grid();
        (0..grid)
            .map(|y| self.cells[y * grid..(y + 1) * grid].to_vec())
            .collect()
    }
}

/// Decodes one cell character: `0` or `.` for blank, digits for 1-9,
/// lowercase letters for 10 and up. `None` for anything else or for a value
/// beyond the grid's range.
pub fn cell_from_char(ch: char, grid: usize) -> Option<u8> {
    let value = match ch {
        '0' | '.' => 0,
        '1'..='9' => ch as u8 - b'0',
        'a'..='w' => ch as u8 - b'a' + 10,
        _ => return None,
    };
    (value as usize <= grid).then_some(value)
}

fn cell_to_char(value: u8) -> char {
    match value {
        0 => '.',
        1..=9 => (b'0' + value) as char,
        _ => (b'a' + value - 10) as char,
    }
}

impl FromStr for Board {
    type Err = MalformedInput;

    /// Parses the 81-character one-line form of a 9×9 puzzle, `.` or `0`
    /// for blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let geometry = GEOMETRY_9X9.clone();
        let grid = geometry.grid();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != geometry.cell_count() {
            return Err(MalformedInput::RowCount { found: chars.len() / grid, expected: grid });
        }
        let mut rows = vec![vec![0u8; grid]; grid];
        for (i, &ch) in chars.iter().enumerate() {
            let (y, x) = (i / grid, i % grid);
            rows[y][x] = cell_from_char(ch, grid)
                .ok_or(MalformedInput::Character { row: y, col: x, ch })?;
        }
        Board::from_rows(geometry, &rows)
    }
}

impl fmt::Display for Board {
    /// Renders the grid with a gap after every sub-grid column and a blank
    /// line after every sub-grid row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.geom.grid();
        for y in 0..grid {
            for x in 0..grid {
                write!(f, "{}", cell_to_char(self.cells[self.geom.index(x, y)]))?;
                if x % self.geom.box_w() == self.geom.box_w() - 1 && x != grid - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
            if y % self.geom.box_h() == self.geom.box_h() - 1 && y != grid - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
