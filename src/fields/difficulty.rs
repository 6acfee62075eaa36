use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// How hard a recipe is to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "facil")]
    Easy,
    #[serde(alias = "media")]
    Medium,
    #[serde(alias = "dificil")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    /// Accepts the English names and the stored legacy values
    /// (`facil`, `media`, `dificil`), ignoring case and surrounding spaces
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "facil" => Ok(Difficulty::Easy),
            "medium" | "media" => Ok(Difficulty::Medium),
            "hard" | "dificil" => Ok(Difficulty::Hard),
            other => Err(ValidationError::invalid(
                "difficulty",
                format!("unknown difficulty '{}', expected easy, medium or hard", other),
            )),
        }
    }
}
