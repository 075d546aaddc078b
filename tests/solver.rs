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

use sudoku_deduce::solver::{claiming, singles, subsets};
use sudoku_deduce::{
    Board, Geometry, MAX_ROUNDS, Outcome, TechniqueLevel, TechniqueStats, UnitId, solve,
};

fn board_from_str(s: &str) -> Board {
    s.parse().unwrap()
}

fn mask(values: &[u8]) -> u32 {
    values.iter().fold(0u32, |acc, &v| acc | 1 << (v - 1))
}

/// Keep only `values` as candidates of `index` on an otherwise untouched cell.
fn restrict(board: &mut Board, index: usize, values: &[u8]) {
    board.remove_candidates(index, board.geometry().full_mask() & !mask(values));
}

fn assert_unit_uniqueness(board: &Board) {
    for unit in board.geometry().all_units() {
        let mut values: Vec<u8> = board
            .geometry()
            .unit_cells(unit)
            .iter()
            .map(|&i| board.cell(i))
            .collect();
        values.sort_unstable();
        assert_eq!(values, (1..=9).collect::<Vec<u8>>(), "unit {unit:?} broken");
    }
}

#[test]
fn test_easy_puzzle_solved_by_singles_alone() {
    let mut board = board_from_str(
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    );
    let report = solve(&mut board).unwrap();

    assert_eq!(report.outcome, Outcome::Solved);
    assert_eq!(report.rounds, 2);
    assert!(board.is_solved());
    assert_unit_uniqueness(&board);

    assert_eq!(
        report.stats,
        TechniqueStats {
            naked_singles: 13,
            hidden_singles: 38,
            claiming: 0,
            disjoint_subsets: 0,
        }
    );
    assert_eq!(report.difficulty(), TechniqueLevel::Basic);
}

#[test]
fn test_moderate_puzzle_needs_claiming() {
    let mut board = board_from_str(
        "2...8.3...6..7..84.3.5..2.9...1.54.8.........4.27.6...3.1..7.4.72..4..6...4.1...3",
    );
    let report = solve(&mut board).unwrap();

    assert_eq!(report.outcome, Outcome::Solved);
    assert_unit_uniqueness(&board);
    assert!(report.stats.claiming > 0);
    assert_eq!(report.stats.disjoint_subsets, 0);
    assert_eq!(report.difficulty(), TechniqueLevel::Intermediate);
}

#[test]
fn test_hard_puzzle_needs_disjoint_subsets() {
    let mut board = board_from_str(
        "......9.7...42.18....7.5.261..9.4....5.....4....5.7..992.1.8....34.59...5.7......",
    );
    let report = solve(&mut board).unwrap();

    assert_eq!(report.outcome, Outcome::Solved);
    assert_eq!(report.rounds, 3);
    assert_unit_uniqueness(&board);
    assert!(report.stats.claiming > 0);
    assert!(report.stats.disjoint_subsets > 0);
    assert_eq!(report.difficulty(), TechniqueLevel::Advanced);
}

#[test]
fn test_extreme_puzzle_stalls_with_candidates_intact() {
    // AI Escargot: known to need guessing beyond this technique battery.
    let mut board = board_from_str(
        "1....7.9..3..2...8..96..5....53..9...1..8...26....4...3......1..4......7..7...3..",
    );
    let report = solve(&mut board).unwrap();

    assert_eq!(report.outcome, Outcome::Stalled);
    assert!(report.rounds <= MAX_ROUNDS);
    assert!(!board.is_solved());

    let empty: Vec<usize> = (0..81).filter(|&i| board.cell(i) == 0).collect();
    assert_eq!(empty.len(), 57);
    // Stalled leaves every open cell with a nonempty candidate set.
    for index in empty {
        assert!(!board.candidate_values(index).is_empty());
    }
}

#[test]
fn test_already_solved_grid_reports_no_techniques() {
    let mut board = board_from_str(
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    );
    let report = solve(&mut board).unwrap();

    assert_eq!(report.outcome, Outcome::Solved);
    assert_eq!(report.rounds, 1);
    assert_eq!(report.stats, TechniqueStats::default());
    assert_eq!(report.difficulty(), TechniqueLevel::None);
}

#[test]
fn test_naked_singles_fill_lone_candidates() {
    // A solved grid with the diagonal blanked: every hole sees its full row
    // and column, leaving exactly one candidate.
    let solved = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let mut chars: Vec<char> = solved.chars().collect();
    for k in 0..9 {
        chars[k * 9 + k] = '.';
    }
    let mut board = board_from_str(&chars.into_iter().collect::<String>());

    let mut placed = 0;
    for y in 0..9 {
        placed += singles::naked_singles(&mut board, UnitId::row(y)).unwrap();
    }
    assert_eq!(placed, 9);
    assert!(board.is_solved());
    assert_unit_uniqueness(&board);
}

#[test]
fn test_hidden_single_places_and_propagates() {
    // On an empty board, make 5 possible in row 0 only at (3, 0).
    let mut board = board_from_str(&".".repeat(81));
    for x in 0..9 {
        if x != 3 {
            board.remove_candidates(x, mask(&[5]));
        }
    }

    let placed = singles::hidden_singles(&mut board, UnitId::row(0)).unwrap();
    assert_eq!(placed, 1);
    assert_eq!(board.cell(3), 5);

    // The placement ripples through the sibling column and sub-grid.
    for y in 1..9 {
        assert!(!board.candidate_values(y * 9 + 3).contains(&5));
    }
    for &index in board.geometry().unit_cells(UnitId::sub_grid(1)) {
        if index != 3 {
            assert!(!board.candidate_values(index).contains(&5));
        }
    }
}

#[test]
fn test_claiming_strips_parent_row_outside_sub_grid() {
    // Confine 7 within sub-grid 0 to its first sub-row.
    let mut board = board_from_str(&".".repeat(81));
    let cells: Vec<usize> = board.geometry().unit_cells(UnitId::sub_grid(0)).to_vec();
    for index in cells {
        if index / 9 != 0 {
            board.remove_candidates(index, mask(&[7]));
        }
    }

    let removed = claiming::claim(&mut board, 0, claiming::Axis::Rows);
    assert_eq!(removed, 6);

    // Gone from the rest of row 0, kept on the claiming sub-row.
    for x in 3..9 {
        assert!(!board.candidate_values(x).contains(&7));
    }
    for x in 0..3 {
        assert!(board.candidate_values(x).contains(&7));
    }
    // Other rows outside the sub-grid are untouched.
    for x in 3..9 {
        assert!(board.candidate_values(9 + x).contains(&7));
    }
}

#[test]
fn test_disjoint_subset_elimination() {
    // Three cells of row 0 with {2,4}, {2,7}, {4,7}: the classic triple.
    let mut board = board_from_str(&".".repeat(81));
    restrict(&mut board, 0, &[2, 4]);
    restrict(&mut board, 1, &[2, 7]);
    restrict(&mut board, 2, &[4, 7]);

    let removed = subsets::eliminate(&mut board, UnitId::row(0), 3);
    assert_eq!(removed, 18); // 3 values from each of the 6 other cells

    // Contributing cells keep their sets.
    assert_eq!(board.candidate_values(0), vec![2, 4]);
    assert_eq!(board.candidate_values(1), vec![2, 7]);
    assert_eq!(board.candidate_values(2), vec![4, 7]);
    // Everyone else in the row loses 2, 4, and 7.
    for x in 3..9 {
        assert_eq!(board.candidate_values(x), vec![1, 3, 5, 6, 8, 9]);
    }
    // Other rows are untouched.
    assert_eq!(board.candidate_values(9).len(), 9);
}

#[test]
fn test_disjoint_subset_is_a_noop_without_confinement() {
    let mut board = board_from_str(&".".repeat(81));
    for size in 2..=4 {
        assert_eq!(subsets::eliminate(&mut board, UnitId::row(0), size), 0);
    }
}

#[test]
fn test_candidate_cardinality_is_monotone_across_rounds() {
    let mut board = board_from_str(
        "......9.7...42.18....7.5.261..9.4....5.....4....5.7..992.1.8....34.59...5.7......",
    );

    let cardinalities = |board: &Board| -> Vec<u32> {
        (0..81).map(|i| board.candidates(i).count_ones()).collect()
    };

    // Replicates the driver's round, checking after every technique batch
    // that no cell ever regains a candidate.
    for _ in 0..5 {
        let mut before = cardinalities(&board);

        for y in 0..9 {
            singles::naked_singles(&mut board, UnitId::row(y)).unwrap();
        }
        let after = cardinalities(&board);
        assert!(after.iter().zip(&before).all(|(a, b)| a <= b));
        before = after;

        for unit in board.geometry().all_units() {
            singles::hidden_singles(&mut board, unit).unwrap();
        }
        let after = cardinalities(&board);
        assert!(after.iter().zip(&before).all(|(a, b)| a <= b));
        before = after;

        for axis in [claiming::Axis::Rows, claiming::Axis::Cols] {
            for b in 0..9 {
                claiming::claim(&mut board, b, axis);
            }
        }
        let after = cardinalities(&board);
        assert!(after.iter().zip(&before).all(|(a, b)| a <= b));
        before = after;

        for size in 2..=4 {
            for unit in board.geometry().all_units() {
                subsets::eliminate(&mut board, unit, size);
            }
        }
        let after = cardinalities(&board);
        assert!(after.iter().zip(&before).all(|(a, b)| a <= b));
    }
}

#[test]
fn test_four_grid_puzzle_solves() {
    let geometry = Geometry::new(2, 2).unwrap();
    let rows = vec![
        vec![1, 0, 0, 4],
        vec![0, 0, 2, 0],
        vec![0, 3, 0, 0],
        vec![2, 0, 0, 3],
    ];
    let mut board = Board::from_rows(geometry, &rows).unwrap();

    let report = solve(&mut board).unwrap();
    assert_eq!(report.outcome, Outcome::Solved);
    assert_eq!(report.rounds, 1);
    assert_eq!(
        board.to_rows(),
        vec![
            vec![1, 2, 3, 4],
            vec![3, 4, 2, 1],
            vec![4, 3, 1, 2],
            vec![2, 1, 4, 3],
        ]
    );
}

#[test]
fn test_report_serializes_to_json() {
    let mut board = board_from_str(
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    );
    let report = solve(&mut board).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"outcome\":\"Solved\""));
    assert!(json.contains("\"rounds\":2"));
    assert!(json.contains("\"naked_singles\":13"));
}
