use std::io::{BufRead, Write};

use chrono::{DateTime, Local};
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::display::{
    display_difficulty_menu, display_leaderboard, display_round_header, display_summary,
    display_welcome,
};
use crate::error::InputError;
use crate::input::InputReader;
use crate::leaderboard::Leaderboard;
use crate::round::{RoundOutcome, play_round};

#[derive(Debug, Clone)]
pub struct Session {
    pub player_name: String,
    pub score: u32,
    pub rounds: u32,
    pub solved: u32,
    pub started_at: DateTime<Local>,
}

impl Session {
    pub fn new(player_name: String) -> Self {
        Self {
            player_name,
            score: 0,
            rounds: 0,
            solved: 0,
            started_at: Local::now(),
        }
    }

    /// Folds a finished round into the session. The score never decreases.
    pub fn record(self, outcome: RoundOutcome) -> Self {
        let solved = matches!(outcome, RoundOutcome::Solved { .. });
        Self {
            score: self.score + outcome.points(),
            rounds: self.rounds + 1,
            solved: self.solved + u32::from(solved),
            ..self
        }
    }

    pub fn elapsed_secs(&self) -> i64 {
        Local::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

/// Runs a whole session: name, rounds until the player declines, then the
/// score is recorded and the leaderboard shown.
///
/// A closed input stream ends the session as if the player declined. Returns
/// `Ok(None)` if the stream closes before a name is entered; nothing is
/// recorded in that case.
#[instrument(skip_all, fields(path = %board.path().display()))]
pub fn run<R, W, G>(
    input: &mut InputReader<R, W>,
    rng: &mut G,
    board: &Leaderboard,
    top_n: usize,
) -> Result<Option<Session>, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    display_welcome(input.output())?;

    let name = match input.read_name() {
        Ok(name) => name,
        Err(InputError::Closed) => {
            warn!("Input closed before a name was entered");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };
    info!(player = %name, "Session started");

    let session = play_rounds(input, rng, Session::new(name))?;
    finish(input.output(), &session, board, top_n)?;
    Ok(Some(session))
}

fn play_rounds<R, W, G>(
    input: &mut InputReader<R, W>,
    rng: &mut G,
    mut session: Session,
) -> Result<Session, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        let outcome = match next_round(input, rng, session.rounds + 1) {
            Ok(outcome) => outcome,
            Err(InputError::Closed) => {
                warn!(round = session.rounds + 1, "Input closed mid-round");
                break;
            }
            Err(e) => return Err(e),
        };

        match outcome {
            RoundOutcome::Solved { points, attempts_used } => {
                debug!(round = session.rounds + 1, points, attempts_used, "Round won")
            }
            RoundOutcome::Exhausted { secret } => {
                debug!(round = session.rounds + 1, secret, "Round lost")
            }
        }
        session = session.record(outcome);
        writeln!(input.output(), "Your current score: {}", session.score)?;

        match input.read_yes_no("\nDo you want to play another round? (yes/no): ") {
            Ok(true) => continue,
            Ok(false) => break,
            Err(InputError::Closed) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(session)
}

fn next_round<R, W, G>(
    input: &mut InputReader<R, W>,
    rng: &mut G,
    round: u32,
) -> Result<RoundOutcome, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    display_round_header(input.output(), round)?;
    display_difficulty_menu(input.output())?;
    let difficulty = input.read_difficulty_choice()?;
    play_round(input, difficulty, rng)
}

fn finish(
    out: &mut impl Write,
    session: &Session,
    board: &Leaderboard,
    top_n: usize,
) -> Result<(), InputError> {
    display_summary(
        out,
        session.score,
        session.rounds,
        session.solved,
        session.elapsed_secs(),
    )?;

    board.append(&session.player_name, session.score, out)?;
    let entries = board.top_entries(top_n, out)?;
    display_leaderboard(out, &entries)?;

    writeln!(out, "\nThanks for playing, {}!", session.player_name)?;
    info!(player = %session.player_name, score = session.score, "Session finished");
    Ok(())
}
