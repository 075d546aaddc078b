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

//! Generalized disjoint-subset elimination ("pairs", "triples", "quads").
//!
//! If n cells of a unit jointly hold exactly n distinct candidates, those n
//! values are confined to those n cells and can be stripped from every other
//! cell of the unit. Cells with a single candidate are excluded from the
//! search: naked singles already handle them.

use std::collections::HashSet;

use itertools::Itertools;

use crate::board::Board;
use crate::geometry::UnitId;

/// Applies disjoint-subset elimination of the given subset `size` to one
/// unit. Returns the number of removed candidates.
///
/// Discovery and protection both work on a snapshot of the unit's candidate
/// masks taken at entry, so when several subsets exist in the same unit the
/// result does not depend on combination enumeration order. A cell whose
/// snapshot mask is a subset of a found union keeps its candidates; every
/// other cell loses the union's values.
pub fn eliminate(board: &mut Board, unit: UnitId, size: usize) -> usize {
    let cells = board.geometry().unit_cells(unit).to_vec();
    let snapshot: Vec<u32> = cells.iter().map(|&i| board.candidates(i)).collect();

    // Candidate masks small enough to take part in a subset of this size.
    let pool: Vec<u32> = snapshot
        .iter()
        .copied()
        .filter(|mask| {
            let cardinality = mask.count_ones() as usize;
            cardinality > 1 && cardinality <= size
        })
        .collect();
    if pool.len() < size {
        return 0;
    }

    // Distinct unions of exactly `size` candidates across `size` cells.
    let mut found: HashSet<u32> = HashSet::new();
    for combination in pool.iter().combinations(size) {
        let union = combination.into_iter().fold(0u32, |acc, &mask| acc | mask);
        if union.count_ones() as usize == size {
            found.insert(union);
        }
    }

    let mut removed = 0;
    for &union in &found {
        for (pos, &index) in cells.iter().enumerate() {
            if snapshot[pos] & !union != 0 {
                removed += board.remove_candidates(index, union);
            }
        }
    }
    removed
}
