use std::io::{self, Write};

use crate::models::{Difficulty, PlayerScore};

pub fn display_welcome(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "  Welcome to the Number Guessing Game!")?;
    writeln!(out, "{}", "=".repeat(40))
}

pub fn display_round_header(out: &mut impl Write, round: u32) -> io::Result<()> {
    writeln!(out, "\n========== Round {} ==========", round)
}

pub fn display_difficulty_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\nSelect a difficulty level:")?;
    for d in Difficulty::ALL {
        writeln!(
            out,
            "  {}. {:<7}(Range: 1-{}, Attempts: {})",
            d.choice(),
            d.display_name(),
            d.range(),
            d.attempts()
        )?;
    }
    Ok(())
}

pub fn display_difficulty_rules(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Difficulty presets:")?;
    for d in Difficulty::ALL {
        writeln!(
            out,
            "  {:<7} range 1-{:<4} {:>2} attempts  base {} pts",
            d.display_name(),
            d.range(),
            d.attempts(),
            d.base_points()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Points = base + 2 x attempts left at the correct guess")?;
    writeln!(out, "Running out of attempts scores 0")
}

pub fn display_leaderboard(out: &mut impl Write, entries: &[PlayerScore]) -> io::Result<()> {
    writeln!(out, "\nLEADERBOARD")?;
    writeln!(out, "{}", "-".repeat(30))?;
    if entries.is_empty() {
        return writeln!(out, "No leaderboard data found yet.");
    }

    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {:<15} {:>5} pts", i + 1, entry.name, entry.score)?;
    }
    Ok(())
}

pub fn format_duration(total_secs: i64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub fn display_summary(
    out: &mut impl Write,
    score: u32,
    rounds: u32,
    solved: u32,
    elapsed_secs: i64,
) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(40))?;
    writeln!(out, "  Game Over! Final score: {}", score)?;
    writeln!(out, "{}", "=".repeat(40))?;
    writeln!(out, "  Rounds played: {}", rounds)?;
    writeln!(out, "  Rounds won:    {}", solved)?;
    writeln!(out, "  Time played:   {}", format_duration(elapsed_secs))
}
