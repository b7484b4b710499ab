//! Score and health for a run

use serde::{Deserialize, Serialize};

use crate::tuning::RulesTuning;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Health reached zero
    Defeat,
    /// Score reached the win threshold
    Victory,
}

impl Outcome {
    /// HUD banner text
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Defeat => "GAME OVER",
            Outcome::Victory => "Victory!",
        }
    }
}

/// Score (never decreases) and health (never increases) between resets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    score: u32,
    health: u32,
    max_health: u32,
    win_score: u32,
}

impl ProgressState {
    pub fn new(rules: &RulesTuning) -> Self {
        Self {
            score: 0,
            health: rules.max_health,
            max_health: rules.max_health,
            win_score: rules.win_score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn at_full_health(&self) -> bool {
        self.health == self.max_health
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Lose health, stopping at zero
    pub fn decrease_health(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Run has ended; defeat wins over victory if both hold
    pub fn outcome(&self) -> Option<Outcome> {
        if self.health == 0 {
            Some(Outcome::Defeat)
        } else if self.score >= self.win_score {
            Some(Outcome::Victory)
        } else {
            None
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Back to session start values
    pub fn reset(&mut self) {
        self.score = 0;
        self.health = self.max_health;
    }
}
