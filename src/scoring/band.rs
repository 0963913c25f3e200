//! Difficulty bands for display and games

use std::fmt;
use std::str::FromStr;

/// Coarse label for an ODS value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DifficultyBand {
    Easy,
    Moderate,
    Hard,
    Brutal,
}

impl DifficultyBand {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Moderate, Self::Hard, Self::Brutal];

    /// Band containing `ods`
    #[must_use]
    pub fn from_ods(ods: f64) -> Self {
        if ods < 0.35 {
            Self::Easy
        } else if ods < 0.5 {
            Self::Moderate
        } else if ods < 0.65 {
            Self::Hard
        } else {
            Self::Brutal
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Hard => "hard",
            Self::Brutal => "brutal",
        }
    }

    /// True if `ods` falls in this band
    #[must_use]
    pub fn contains(self, ods: f64) -> bool {
        Self::from_ods(ods) == self
    }
}

/// Band containing `ods`
#[must_use]
pub fn difficulty_band(ods: f64) -> DifficultyBand {
    DifficultyBand::from_ods(ods)
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|band| band.name() == lower)
            .ok_or_else(|| format!("unknown difficulty band '{s}' (easy, moderate, hard, brutal)"))
    }
}
