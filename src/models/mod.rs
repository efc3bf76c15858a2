pub mod config;
pub mod difficulty;
pub mod score;

// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::{Difficulty, calculate_points};
pub use score::PlayerScore;
