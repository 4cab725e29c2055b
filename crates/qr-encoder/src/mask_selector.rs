//! Trying every mask pattern and picking the one with the lowest total
//! penalty score, per the four rules of Annex C.

use crate::ecc_level::ErrorCorrectionLevel;
use crate::finder_penalty::FinderPenalty;
use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::placer;

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

/// Applies each of the eight masks in turn, scores the result (with real
/// format bits stamped in, since those modules count toward the penalty
/// too), and leaves `matrix` masked with the winner.
pub(crate) fn select_and_apply(matrix: &mut Matrix, ecl: ErrorCorrectionLevel) -> Mask {
    let mut best_mask = Mask::new(0).expect("0 is valid");
    let mut best_penalty = i32::MAX;

    for i in 0..8u8 {
        let mask = Mask::new(i).expect("0..=7 is valid");
        placer::apply_mask(matrix, mask);
        matrix.draw_format_bits(ecl, mask);
        let penalty = penalty_score(matrix);
        if penalty < best_penalty {
            best_penalty = penalty;
            best_mask = mask;
        }
        // Undo: re-masking and re-stamping with mask 0 is not an inverse, so
        // unmask explicitly before trying the next candidate.
        placer::apply_mask(matrix, mask);
    }

    placer::apply_mask(matrix, best_mask);
    matrix.draw_format_bits(ecl, best_mask);
    best_mask
}

fn penalty_score(matrix: &Matrix) -> i32 {
    let size = matrix.size;
    let mut total = 0;

    // Rule 1: runs of 5+ same-colored modules in a row or column.
    for y in 0..size {
        total += run_penalty((0..size).map(|x| matrix.get(x, y)));
    }
    for x in 0..size {
        total += run_penalty((0..size).map(|y| matrix.get(x, y)));
    }

    // Rule 2: 2x2 blocks of a single color.
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let c = matrix.get(x, y);
            if matrix.get(x + 1, y) == c && matrix.get(x, y + 1) == c && matrix.get(x + 1, y + 1) == c {
                total += PENALTY_N2;
            }
        }
    }

    // Rule 3: 1:1:3:1:1 finder-like patterns, with a 4-module light margin on
    // one side, found while scanning rows then columns.
    for y in 0..size {
        total += finder_like_penalty((0..size).map(|x| matrix.get(x, y)), size);
    }
    for x in 0..size {
        total += finder_like_penalty((0..size).map(|y| matrix.get(x, y)), size);
    }

    // Rule 4: overall dark/light balance, in steps of 5 percentage points
    // away from 50%. Worked on the exact (un-truncated) ratio, not a
    // pre-rounded percentage, so a dark count near a multiple-of-5 boundary
    // scores correctly.
    let dark: i32 = (0..size)
        .flat_map(|y| (0..size).map(move |x| (x, y)))
        .filter(|&(x, y)| matrix.get(x, y))
        .count() as i32;
    let total_modules = size * size;
    let k = ((dark * 20 - total_modules * 10).abs() + total_modules - 1) / total_modules - 1;
    total += k * PENALTY_N4;

    total
}

fn run_penalty(line: impl Iterator<Item = bool>) -> i32 {
    let mut total = 0;
    let mut run_color: Option<bool> = None;
    let mut run_len = 0;
    for color in line {
        if Some(color) == run_color {
            run_len += 1;
        } else {
            if run_len >= 5 {
                total += PENALTY_N1 + (run_len - 5);
            }
            run_color = Some(color);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        total += PENALTY_N1 + (run_len - 5);
    }
    total
}

fn finder_like_penalty(line: impl Iterator<Item = bool>, size: i32) -> i32 {
    let mut finder = FinderPenalty::new(size);
    let mut run_color = false;
    let mut run_len = 0;
    let mut total = 0;
    for color in line {
        if color == run_color {
            run_len += 1;
        } else {
            finder.add_history(run_len);
            if !run_color {
                total += finder.count_patterns() * PENALTY_N3;
            }
            run_color = color;
            run_len = 1;
        }
    }
    total + finder.terminate_and_count(run_color, run_len) * PENALTY_N3
}
