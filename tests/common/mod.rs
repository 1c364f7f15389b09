// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use crystal_search::tableau::{Cell, Shape, Tableau, Weight};

pub fn shape(rows: usize, cols: usize) -> Shape {
    Shape::new(rows, cols).expect("valid shape")
}

pub fn weight(counts: &[u32]) -> Weight {
    Weight::new(counts.to_vec()).expect("valid weight")
}

pub fn tableau(rows: Vec<Vec<u32>>) -> Tableau {
    Tableau::try_from(rows).expect("semistandard tableau")
}

/// Semistandard check written against nested rows, independent of the
/// library's own check.
pub fn rows_are_semistandard(rows: &[Vec<u32>]) -> bool {
    for row in rows {
        for c in 1..row.len() {
            if row[c - 1] > row[c] {
                return false;
            }
        }
    }
    for r in 1..rows.len() {
        for c in 0..rows[r].len() {
            if rows[r - 1][c] >= rows[r][c] {
                return false;
            }
        }
    }
    true
}

/// Cells where two tableaux of the same shape differ.
pub fn differing_cells(a: &Tableau, b: &Tableau) -> Vec<Cell> {
    let s = a.shape();
    (0..s.cell_count())
        .map(|p| s.cell_at(p))
        .filter(|&cell| a.get(cell) != b.get(cell))
        .collect()
}

/// Every weight with `total` entries over an alphabet of `alphabet_size` values.
pub fn all_weights(total: u32, alphabet_size: usize) -> Vec<Weight> {
    fn extend(prefix: &mut Vec<u32>, left: u32, slots: usize, out: &mut Vec<Vec<u32>>) {
        if slots == 1 {
            prefix.push(left);
            out.push(prefix.clone());
            prefix.pop();
            return;
        }
        for count in 0..=left {
            prefix.push(count);
            extend(prefix, left - count, slots - 1, out);
            prefix.pop();
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), total, alphabet_size, &mut out);
    out.into_iter().map(|counts| weight(&counts)).collect()
}

/// Brute force: every grid over `1..=alphabet_size` that is semistandard.
pub fn brute_force_tableaux(s: Shape, alphabet_size: u32) -> Vec<Vec<Vec<u32>>> {
    let cells = s.cell_count();
    let mut found = Vec::new();
    let mut digits = vec![1u32; cells];
    loop {
        let rows: Vec<Vec<u32>> = digits.chunks(s.cols()).map(<[u32]>::to_vec).collect();
        if rows_are_semistandard(&rows) {
            found.push(rows);
        }
        // Odometer increment.
        let mut i = 0;
        loop {
            if i == cells {
                return found;
            }
            if digits[i] < alphabet_size {
                digits[i] += 1;
                break;
            }
            digits[i] = 1;
            i += 1;
        }
    }
}
