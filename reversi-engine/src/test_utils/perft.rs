//! "Perft" performance test: count the number of leaves at a given depth.
//! See: http://www.aartbik.com/MISC/reversi.html
//!
//! The engine has no pass move, so a position where the mover cannot place
//! is counted as a leaf. Published counts only involve passes from depth 9.

use crate::board::Engine;

pub fn run_perft(depth: u64) -> u64 {
    leaves_below(&Engine::default(), depth)
}

fn leaves_below(engine: &Engine, depth: u64) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let mut leaves = 0;
    let mut moved = false;

    for row in 0..engine.height() {
        for col in 0..engine.width() {
            if !matches!(engine.flips_at(col, row), Ok(flips) if flips > 0) {
                continue;
            }

            let mut child = engine.clone();
            if let Ok(true) = child.place_piece(col, row) {
                moved = true;
                leaves += leaves_below(&child, depth - 1);
            }
        }
    }

    if moved {
        leaves
    } else {
        1
    }
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}
