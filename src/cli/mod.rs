mod config_cmd;
mod difficulty_cmd;
mod leaderboard_cmd;
mod play;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::leaderboard::Leaderboard;
use crate::models::{Difficulty, config};

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Guess the secret number and climb the leaderboard", long_about = None)]
pub struct Cli {
    /// Leaderboard file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a session (the default)
    Play,
    /// Show the leaderboard
    Leaderboard {
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show the difficulty presets and scoring
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

pub fn run(cli: Cli) {
    let mut user_config = config::load_config();
    if let Some(path) = cli.file {
        user_config.leaderboard_path = path;
    }
    let board = Leaderboard::new(user_config.leaderboard_path.clone());

    match cli.command {
        None | Some(Commands::Play) => play::play_session(&board, user_config.top_n),
        Some(Commands::Leaderboard { top }) => {
            leaderboard_cmd::show_leaderboard(&board, top.unwrap_or(user_config.top_n))
        }
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Config { save }) => config_cmd::handle_config(&user_config, save),
    }
}
