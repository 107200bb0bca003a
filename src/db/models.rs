use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameOutcome::Won => "Won",
            GameOutcome::Lost => "Lost",
        };
        write!(f, "{}", s)
    }
}

impl GameOutcome {
    pub fn from_won(won: bool) -> Self {
        if won { GameOutcome::Won } else { GameOutcome::Lost }
    }
}

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// A word available for play
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub id: i64,
    pub word: String,
    pub category: String,
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub id: i64,
    pub account_id: i64,
    pub word: String,
    pub mistakes: u32,
    pub won: bool,
    pub played_at: DateTime<Utc>,
}

impl GameRecord {
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::from_won(self.won)
    }
}

/// Per-account totals shown on the statistics screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameStats {
    pub total_games: i64,
    pub total_wins: i64,
    /// Mean mistakes per game, 0.0 when no games were played
    pub average_mistakes: f64,
}

impl GameStats {
    pub fn losses(&self) -> i64 {
        self.total_games - self.total_wins
    }

    /// Percentage of games won, 0.0 when no games were played
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            (self.total_wins as f64 / self.total_games as f64) * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcome() {
        let mut record = GameRecord {
            id: 1,
            account_id: 1,
            word: "CAT".to_string(),
            mistakes: 2,
            won: true,
            played_at: Utc::now(),
        };
        assert_eq!(record.outcome(), GameOutcome::Won);
        assert_eq!(record.outcome().to_string(), "Won");

        record.won = false;
        assert_eq!(record.outcome(), GameOutcome::Lost);
        assert_eq!(record.outcome().to_string(), "Lost");
    }

    #[test]
    fn test_stats_with_no_games() {
        let stats = GameStats::default();
        assert_eq!(stats.win_rate(), 0.0);
        assert_eq!(stats.average_mistakes, 0.0);
        assert_eq!(stats.losses(), 0);
    }

    #[test]
    fn test_win_rate() {
        let stats = GameStats {
            total_games: 4,
            total_wins: 3,
            average_mistakes: 2.5,
        };
        assert_eq!(stats.win_rate(), 75.0);
        assert_eq!(stats.losses(), 1);
    }
}
