use std::io;

use tracing::error;

use crate::input::InputReader;
use crate::leaderboard::Leaderboard;
use crate::session;

pub fn play_session(board: &Leaderboard, top_n: usize) {
    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock(), io::stdout());
    let mut rng = rand::thread_rng();

    if let Err(e) = session::run(&mut input, &mut rng, board, top_n) {
        error!(error = %e, "Session ended early");
        eprintln!("Session ended early: {}", e);
    }
}
