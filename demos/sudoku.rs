//! # Sudoku as exact cover
//!
//! A 9x9 Sudoku has 729 candidate placements (81 cells times 9 digits) and
//! 324 constraints: every cell holds one digit, and every row, column and
//! 3x3 box holds each digit once. Each placement satisfies exactly four
//! constraints, so a solved grid is an exact cover of the constraint columns.
//!
//! Run with `cargo run --example sudoku -- <81 chars>`; any character other
//! than 1-9 is a blank.

use bitvec::prelude::*;
use dancing_links::{build, make_search};

const CONSTRAINTS: usize = 81 * 4;

/// Solves a puzzle given in row-major order, or `None` if it has no solution.
fn solve(puzzle: &str) -> Option<String> {
    if puzzle.chars().count() != 81 {
        return None;
    }

    let mut givens = bitvec![0; CONSTRAINTS];
    let mut placements = Vec::new();
    for (cell, ch) in puzzle.chars().enumerate() {
        let Some(digit @ 1..=9) = ch.to_digit(10) else {
            continue;
        };
        let digit = (digit - 1) as usize;
        for column in constraints(cell, digit) {
            givens.set(column, true);
        }
        placements.push((cell, digit));
    }

    // every placement that does not clash with a given
    for cell in 0..81 {
        for digit in 0..9 {
            if constraints(cell, digit).iter().any(|&c| givens[c]) {
                continue;
            }
            placements.push((cell, digit));
        }
    }

    let matrix: Vec<Vec<bool>> = placements
        .iter()
        .map(|&(cell, digit)| {
            let mut row = vec![false; CONSTRAINTS];
            for column in constraints(cell, digit) {
                row[column] = true;
            }
            row
        })
        .collect();
    let names: Vec<String> = (0..CONSTRAINTS).map(constraint_name).collect();

    let mut m = build(&matrix, &names).ok()?;
    let solutions = make_search(false)(&mut m);
    let solution = solutions.first()?;

    let mut grid = ['.'; 81];
    for row in solution.rows(&m) {
        let (cell, digit) = placements[row];
        grid[cell] = char::from_digit(digit as u32 + 1, 10)?;
    }
    Some(grid.iter().collect())
}

/// The four constraint columns a placement satisfies.
fn constraints(cell: usize, digit: usize) -> [usize; 4] {
    let row = cell / 9;
    let col = cell % 9;
    let b = row / 3 * 3 + col / 3;
    [
        cell,
        81 + row * 9 + digit,
        81 * 2 + col * 9 + digit,
        81 * 3 + b * 9 + digit,
    ]
}

fn constraint_name(column: usize) -> String {
    let (kind, index) = (column / 81, column % 81);
    let (major, digit) = (index / 9, index % 9 + 1);
    match kind {
        0 => format!("r{}c{}", major + 1, digit),
        1 => format!("r{}#{}", major + 1, digit),
        2 => format!("c{}#{}", major + 1, digit),
        _ => format!("b{}#{}", major + 1, digit),
    }
}

fn main() {
    let Some(puzzle) = std::env::args().nth(1) else {
        eprintln!("usage: sudoku <81 character puzzle>");
        std::process::exit(2);
    };
    match solve(&puzzle) {
        Some(solution) => println!("{solution}"),
        None => {
            eprintln!("no solution");
            std::process::exit(1);
        }
    }
}
