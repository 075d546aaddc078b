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

//! Puzzle dimensions and unit enumeration.
//!
//! A *unit* is any group of `grid` cells that must contain each value exactly
//! once: a row, a column, or a sub-grid of `box_w` × `box_h` cells. The
//! [`Geometry`] precomputes the cell-index tables for every unit and the peer
//! list of every cell, so the techniques only ever walk slices of indices.

use std::collections::HashSet;
use std::fmt;

use crate::types::MalformedInput;

/// The kind of a unit within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Row,
    Col,
    SubGrid,
}

/// Names one unit: a row, column, or sub-grid, by its index in `[0, grid)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnitId {
    pub kind: UnitKind,
    pub index: usize,
}

impl UnitId {
    pub fn row(index: usize) -> Self {
        UnitId { kind: UnitKind::Row, index }
    }

    pub fn col(index: usize) -> Self {
        UnitId { kind: UnitKind::Col, index }
    }

    pub fn sub_grid(index: usize) -> Self {
        UnitId { kind: UnitKind::SubGrid, index }
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            UnitKind::Row => write!(f, "row {}", self.index),
            UnitKind::Col => write!(f, "column {}", self.index),
            UnitKind::SubGrid => write!(f, "sub-grid {}", self.index),
        }
    }
}

/// Grid dimensions plus the derived unit and peer tables.
///
/// `grid = box_w * box_h`, which also makes the number of sub-grids equal to
/// `grid`, so every unit kind has exactly `grid` units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    grid: usize,
    box_w: usize,
    box_h: usize,
    rows: Vec<Vec<usize>>,
    cols: Vec<Vec<usize>>,
    sub_grids: Vec<Vec<usize>>,
    peers: Vec<Vec<usize>>,
}

lazy_static::lazy_static! {
    /// Shared geometry of the standard 9×9 puzzle with 3×3 sub-grids.
    pub static ref GEOMETRY_9X9: Geometry =
        Geometry::new(3, 3).expect("3x3 sub-grids form a valid geometry");
}

impl Geometry {
    /// Builds the geometry for `box_w` × `box_h` sub-grids.
    ///
    /// The grid side is `box_w * box_h`; candidate sets are 32-bit masks, so
    /// anything past a side of 32 (or a degenerate zero dimension) is
    /// rejected as malformed.
    pub fn new(box_w: usize, box_h: usize) -> Result<Self, MalformedInput> {
        let grid = box_w * box_h;
        if box_w == 0 || box_h == 0 || grid < 2 || grid > 32 {
            return Err(MalformedInput::Dimensions { box_w, box_h });
        }

        let rows: Vec<Vec<usize>> = (0..grid)
            .map(|y| (0..grid).map(|x| y * grid + x).collect())
            .collect();
        let cols: Vec<Vec<usize>> = (0..grid)
            .map(|x| (0..grid).map(|y| y * grid + x).collect())
            .collect();

        let boxes_per_row = grid / box_w;
        let sub_grids: Vec<Vec<usize>> = (0..grid)
            .map(|b| {
                let y0 = (b / boxes_per_row) * box_h;
                let x0 = (b % boxes_per_row) * box_w;
                (0..box_h)
                    .flat_map(|dy| (0..box_w).map(move |dx| (y0 + dy) * grid + x0 + dx))
                    .collect()
            })
            .collect();

        let mut peers = Vec::with_capacity(grid * grid);
        for i in 0..grid * grid {
            let (y, x) = (i / grid, i % grid);
            let b = (y / box_h) * boxes_per_row + x / box_w;
            let mut set: HashSet<usize> = HashSet::new();
            set.extend(&rows[y]);
            set.extend(&cols[x]);
            set.extend(&sub_grids[b]);
            set.remove(&i);
            let mut list: Vec<usize> = set.into_iter().collect();
            list.sort_unstable();
            peers.push(list);
        }

        Ok(Geometry { grid, box_w, box_h, rows, cols, sub_grids, peers })
    }

    /// Side length of the grid.
    pub fn grid(&self) -> usize {
        self.grid
    }

    /// Width of one sub-grid.
    pub fn box_w(&self) -> usize {
        self.box_w
    }

    /// Height of one sub-grid.
    pub fn box_h(&self) -> usize {
        self.box_h
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.grid * self.grid
    }

    /// Bitmask with one bit set per legal value.
    pub fn full_mask(&self) -> u32 {
        ((1u64 << self.grid) - 1) as u32
    }

    /// Flat cell index of `(x, y)`.
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.grid + x
    }

    /// Row index of a cell.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.grid
    }

    /// Column index of a cell.
    pub fn col_of(&self, index: usize) -> usize {
        index % self.grid
    }

    /// Sub-grid index of a cell.
    pub fn sub_grid_of(&self, index: usize) -> usize {
        let (y, x) = (index / self.grid, index % self.grid);
        (y / self.box_h) * (self.grid / self.box_w) + x / self.box_w
    }

    /// Cell indices of a unit, in reading order.
    pub fn unit_cells(&self, unit: UnitId) -> &[usize] {
        match unit.kind {
            UnitKind::Row => &self.rows[unit.index],
            UnitKind::Col => &self.cols[unit.index],
            UnitKind::SubGrid => &self.sub_grids[unit.index],
        }
    }

    /// The peers of a cell: every other cell sharing its row, column, or
    /// sub-grid.
    pub fn peers(&self, index: usize) -> &[usize] {
        &self.peers[index]
    }

    /// All units of the grid: every row, then every column, then every
    /// sub-grid.
    pub fn all_units(&self) -> impl Iterator<Item = UnitId> + use<> {
        let grid = self.grid;
        (0..grid)
            .map(UnitId::row)
            .chain((0..grid).map(UnitId::col))
            .chain((0..grid).map(UnitId::sub_grid))
    }
}
