use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Fixed attributes of a difficulty preset. The lower bound of the guess range is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub range: u32,
    pub attempts: u32,
    pub base_points: u32,
}

// Indexed by `Difficulty as usize`.
const PRESETS: [Preset; 3] = [
    Preset { range: 50, attempts: 10, base_points: 10 },
    Preset { range: 100, attempts: 7, base_points: 20 },
    Preset { range: 200, attempts: 5, base_points: 30 },
];

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn preset(&self) -> Preset {
        PRESETS[*self as usize]
    }

    pub fn range(&self) -> u32 {
        self.preset().range
    }

    pub fn attempts(&self) -> u32 {
        self.preset().attempts
    }

    pub fn base_points(&self) -> u32 {
        self.preset().base_points
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Menu number shown to the player, 1-based.
    pub fn choice(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_choice(choice: u32) -> Option<Difficulty> {
        Self::ALL.into_iter().find(|d| d.choice() == choice)
    }
}

pub fn calculate_points(difficulty: Difficulty, attempts_left: u32) -> u32 {
    difficulty.base_points() + 2 * attempts_left
}
