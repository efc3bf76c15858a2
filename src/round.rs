use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::error::InputError;
use crate::input::InputReader;
use crate::models::{Difficulty, calculate_points};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Solved { points: u32, attempts_used: u32 },
    Exhausted { secret: u32 },
}

impl RoundOutcome {
    pub fn points(&self) -> u32 {
        match self {
            RoundOutcome::Solved { points, .. } => *points,
            RoundOutcome::Exhausted { .. } => 0,
        }
    }
}

/// Draws a secret uniformly from `1..=range` and plays one round against it.
pub fn play_round<R, W, G>(
    input: &mut InputReader<R, W>,
    difficulty: Difficulty,
    rng: &mut G,
) -> Result<RoundOutcome, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let secret = rng.gen_range(1..=difficulty.range());
    play_round_with_secret(input, difficulty, secret)
}

pub fn play_round_with_secret<R: BufRead, W: Write>(
    input: &mut InputReader<R, W>,
    difficulty: Difficulty,
    secret: u32,
) -> Result<RoundOutcome, InputError> {
    let range = difficulty.range();
    let mut attempts_left = difficulty.attempts();
    debug!(difficulty = difficulty.display_name(), secret, "Round started");

    let out = input.output();
    writeln!(out, "\nI'm thinking of a number between 1 and {}.", range)?;
    writeln!(out, "You have {} attempts. Good luck!", attempts_left)?;

    while attempts_left > 0 {
        let guess = input.read_guess(range, attempts_left)?;
        let out = input.output();

        if guess == secret {
            writeln!(out, "Correct! You guessed it!")?;
            let points = calculate_points(difficulty, attempts_left);
            let attempts_used = difficulty.attempts() - attempts_left + 1;
            info!(points, attempts_used, "Round solved");
            return Ok(RoundOutcome::Solved {
                points,
                attempts_used,
            });
        } else if guess < secret {
            writeln!(out, "Too low! Try a higher number.")?;
        } else {
            writeln!(out, "Too high! Try a lower number.")?;
        }

        attempts_left -= 1;
    }

    writeln!(
        input.output(),
        "Out of attempts! The correct number was {}.",
        secret
    )?;
    info!(secret, "Round lost");
    Ok(RoundOutcome::Exhausted { secret })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn reader(script: &str) -> InputReader<Cursor<Vec<u8>>, Vec<u8>> {
        InputReader::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn printed(reader: InputReader<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(reader.into_parts().1).unwrap()
    }

    #[test]
    fn test_first_guess_scores_full_bonus() {
        for d in Difficulty::ALL {
            let mut r = reader("7\n");
            let outcome = play_round_with_secret(&mut r, d, 7).unwrap();
            assert_eq!(outcome.points(), d.base_points() + 2 * d.attempts());
            assert_eq!(
                outcome,
                RoundOutcome::Solved {
                    points: d.base_points() + 2 * d.attempts(),
                    attempts_used: 1
                }
            );
        }
    }

    #[test]
    fn test_exhausted_scores_zero() {
        for d in Difficulty::ALL {
            let script = "1\n".repeat(d.attempts() as usize);
            let mut r = reader(&script);
            let outcome = play_round_with_secret(&mut r, d, 2).unwrap();
            assert_eq!(outcome, RoundOutcome::Exhausted { secret: 2 });
            assert_eq!(outcome.points(), 0);
            assert!(printed(r).contains("The correct number was 2."));
        }
    }

    #[test]
    fn test_directional_feedback_and_bonus() {
        // Hard: 5 attempts, solved on the third guess with 3 attempts left.
        let mut r = reader("100\n150\n120\n");
        let outcome = play_round_with_secret(&mut r, Difficulty::Hard, 120).unwrap();
        assert_eq!(
            outcome,
            RoundOutcome::Solved {
                points: 30 + 2 * 3,
                attempts_used: 3
            }
        );
        let out = printed(r);
        assert!(out.contains("Too low!"));
        assert!(out.contains("Too high!"));
    }

    #[test]
    fn test_invalid_guess_does_not_cost_an_attempt() {
        let mut r = reader("abc\n0\n25\n");
        let outcome = play_round_with_secret(&mut r, Difficulty::Easy, 25).unwrap();
        assert_eq!(outcome.points(), 10 + 2 * 10);
    }

    #[test]
    fn test_last_attempt_correct() {
        let mut r = reader("1\n1\n1\n1\n9\n");
        let outcome = play_round_with_secret(&mut r, Difficulty::Hard, 9).unwrap();
        assert_eq!(outcome.points(), 32);
    }

    #[test]
    fn test_random_secret_within_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut r = reader(&"1\n".repeat(5));
            match play_round(&mut r, Difficulty::Hard, &mut rng).unwrap() {
                RoundOutcome::Exhausted { secret } => assert!((2..=200).contains(&secret)),
                RoundOutcome::Solved { .. } => {}
            }
        }
    }

    #[test]
    fn test_closed_input_mid_round() {
        let mut r = reader("10\n");
        let err = play_round_with_secret(&mut r, Difficulty::Easy, 20).unwrap_err();
        assert!(matches!(err, InputError::Closed));
    }
}
