use std::io::{self, Write};

use crate::display::display_leaderboard;
use crate::leaderboard::Leaderboard;

pub fn show_leaderboard(board: &Leaderboard, top_n: usize) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let printed = board
        .top_entries(top_n, &mut out)
        .and_then(|entries| display_leaderboard(&mut out, &entries))
        .and_then(|_| out.flush());
    if let Err(e) = printed {
        eprintln!("Failed to print leaderboard: {}", e);
    }
}
