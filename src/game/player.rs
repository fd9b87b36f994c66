//! Seated players and their scores

use crate::board::PlayerId;

/// A seat at the table and its running score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
}

impl Player {
    /// Player with the default display name ("Player 1" for index 0)
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {}", id.index() + 1),
            score: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Award one point, returning the new score
    pub(crate) fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}
