use crate::models::config::{self, GameConfig};

pub fn handle_config(user_config: &GameConfig, save: bool) {
    match config::get_config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (no home directory)"),
    }
    println!("Leaderboard: {}", user_config.leaderboard_path.display());
    println!("Top entries: {}", user_config.top_n);

    if save {
        match config::save_config(user_config) {
            Ok(path) => println!("\nSaved configuration to {}", path.display()),
            Err(e) => eprintln!("\nFailed to save config: {}", e),
        }
    }
}
