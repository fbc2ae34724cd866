//! Streak detection - four directional scans around the last-placed coin
//!
//! Each detector anchors on the cell that just received a coin and scans a
//! bounded window along its axis, returning the longest contiguous run of
//! matching-color cells inside the window. A mismatching or empty cell resets
//! the run; matching cells never combine across a gap. The minimum return is
//! 1 (the anchor itself always matches).
//!
//! Window reach per leg is `win_len - 1` cells, each leg independently
//! clipped to the tighter board bound, so every scan touches at most
//! `2 * win_len - 1` cells: O(1) per move on the default board.

use crate::core::Board;
use crate::types::Color;

/// Longest run in the anchor's column, looking only downward.
///
/// Gravity guarantees the cells above a freshly placed coin are empty, so the
/// upward leg would never extend a run.
pub fn vertical_streak(board: &Board, row: usize, col: usize, color: Color, reach: usize) -> u32 {
    let fwd = reach.min(board.rows() - 1 - row);
    scan_line(board, row, col, color, (1, 0), 0, fwd)
}

/// Longest run in the anchor's row, up to `reach` cells on either side.
pub fn horizontal_streak(board: &Board, row: usize, col: usize, color: Color, reach: usize) -> u32 {
    let back = reach.min(col);
    let fwd = reach.min(board.cols() - 1 - col);
    scan_line(board, row, col, color, (0, 1), back, fwd)
}

/// Longest run on the `/` diagonal through the anchor.
///
/// The forward leg moves toward larger column and smaller row, the back leg
/// toward smaller column and larger row.
pub fn diagonal_streak(board: &Board, row: usize, col: usize, color: Color, reach: usize) -> u32 {
    let back = reach.min(col).min(board.rows() - 1 - row);
    let fwd = reach.min(board.cols() - 1 - col).min(row);
    scan_line(board, row, col, color, (-1, 1), back, fwd)
}

/// Longest run on the `\` antidiagonal through the anchor.
///
/// Row and column increase together on the forward leg.
pub fn antidiagonal_streak(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
    reach: usize,
) -> u32 {
    let back = reach.min(col).min(row);
    let fwd = reach
        .min(board.cols() - 1 - col)
        .min(board.rows() - 1 - row);
    scan_line(board, row, col, color, (1, 1), back, fwd)
}

/// Maximum of the four directional streaks anchored at (row, col).
pub fn best_streak(board: &Board, row: usize, col: usize, color: Color, reach: usize) -> u32 {
    vertical_streak(board, row, col, color, reach)
        .max(horizontal_streak(board, row, col, color, reach))
        .max(diagonal_streak(board, row, col, color, reach))
        .max(antidiagonal_streak(board, row, col, color, reach))
}

/// Walk the clipped window through the anchor, counting the longest run.
///
/// `(dr, dc)` is the per-step delta; `back`/`fwd` are pre-clipped so every
/// visited cell is in bounds.
fn scan_line(
    board: &Board,
    row: usize,
    col: usize,
    color: Color,
    (dr, dc): (isize, isize),
    back: usize,
    fwd: usize,
) -> u32 {
    let mut r = row as isize - back as isize * dr;
    let mut c = col as isize - back as isize * dc;

    let mut current = 0u32;
    let mut best = 1u32;
    for _ in 0..=(back + fwd) {
        if board.is_color(r as usize, c as usize, color) {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
        r += dr;
        c += dc;
    }
    best
}
