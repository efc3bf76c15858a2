use std::io;

use crate::display::display_difficulty_rules;
use crate::models::Difficulty;

pub fn handle_difficulty(level: Option<Difficulty>) {
    match level {
        None => {
            if let Err(e) = display_difficulty_rules(&mut io::stdout()) {
                eprintln!("Failed to print difficulty presets: {}", e);
            }
        }
        Some(level) => {
            let preset = level.preset();
            println!("Difficulty: {}", level.display_name());
            println!("Menu choice: {}", level.choice());
            println!("Range:      1-{}", preset.range);
            println!("Attempts:   {}", preset.attempts);
            println!("Base score: {} pts", preset.base_points);
            println!(
                "Best score: {} pts (correct on the first guess)",
                preset.base_points + 2 * preset.attempts
            );
        }
    }
}
