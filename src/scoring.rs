use tracing::info;

use crate::matching::MatchFound;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scoring {
    score: u64,
    matches_awarded: u32,
}

impl Scoring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award_for_match(&mut self, found: &MatchFound) {
        self.score += u64::from(found.points);
        self.matches_awarded += 1;
        info!(points = found.points, score = self.score, "awarded points for match");
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn matches_awarded(&self) -> u32 {
        self.matches_awarded
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
