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

//! Thin command-line front end: reads a puzzle file, runs the engine, and
//! renders the result. All actual solving lives in the library.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sudoku_deduce::board::cell_from_char;
use sudoku_deduce::{Board, Geometry, MalformedInput, Outcome, solve};

#[derive(Parser, Debug)]
#[command(version, about = "Solve a Sudoku puzzle by logical deduction alone.")]
struct Args {
    /// Puzzle file: one row per line, `0` or `.` for a blank cell.
    puzzle: PathBuf,

    /// Sub-grid width.
    #[arg(long, default_value_t = 3)]
    box_width: usize,

    /// Sub-grid height.
    #[arg(long, default_value_t = 3)]
    box_height: usize,

    /// Print the remaining candidates of every unsolved cell.
    #[arg(long)]
    candidates: bool,

    /// Emit the solve report as JSON instead of the grid.
    #[arg(long)]
    json: bool,
}

/// Decodes the row lines of a puzzle file; blank lines are ignored so grids
/// saved with sub-grid spacing load unchanged.
fn parse_rows(text: &str, grid: usize) -> Result<Vec<Vec<u8>>, MalformedInput> {
    let mut rows = Vec::with_capacity(grid);
    for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        let y = rows.len();
        let mut row = Vec::with_capacity(grid);
        for (x, ch) in line.chars().filter(|ch| *ch != ' ').enumerate() {
            let value = cell_from_char(ch, grid)
                .ok_or(MalformedInput::Character { row: y, col: x, ch })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

fn run(args: &Args) -> Result<Outcome, Box<dyn Error>> {
    let text = fs::read_to_string(&args.puzzle)?;
    let geometry = Geometry::new(args.box_width, args.box_height)?;
    let grid = geometry.grid();
    let rows = parse_rows(&text, grid)?;
    let mut board = Board::from_rows(geometry, &rows)?;

    let report = solve(&mut board)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{board}");
        match report.outcome {
            Outcome::Solved => println!(
                "\nsolved in {} round(s), {:?} techniques",
                report.rounds,
                report.difficulty()
            ),
            Outcome::Stalled => println!(
                "\nstalled after {} round(s): this puzzle needs guessing",
                report.rounds
            ),
        }
    }

    if args.candidates && report.outcome == Outcome::Stalled {
        for index in 0..board.geometry().cell_count() {
            if board.cell(index) == 0 {
                println!(
                    "({}, {}): {:?}",
                    board.geometry().col_of(index),
                    board.geometry().row_of(index),
                    board.candidate_values(index)
                );
            }
        }
    }

    Ok(report.outcome)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(Outcome::Solved) => ExitCode::SUCCESS,
        Ok(Outcome::Stalled) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
