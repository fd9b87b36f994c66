//! Display state fed by session events

use crate::board::{PlayerId, Pos};
use crate::game::{GameObserver, Session};
use crate::rules::Sequence;

/// What the side panel and board overlays show.
///
/// Game fields follow [`crate::game::GameEvent`]s only; `message` is set by
/// the app when an action is rejected.
#[derive(Debug, Default)]
pub struct Hud {
    pub current_turn: Option<PlayerId>,
    pub scores: Vec<u32>,
    pub winner: Option<PlayerId>,
    pub last_move: Option<Pos>,
    /// Scoring runs of the current game, oldest first
    pub sequences: Vec<Sequence>,
    pub move_count: usize,
    /// Notice for the last rejected action
    pub message: Option<String>,
}

impl Hud {
    /// Apply every queued session event
    pub fn sync(&mut self, session: &mut Session) {
        for event in session.drain_events() {
            event.dispatch(self);
        }
    }

    pub fn turn_text(&self) -> String {
        match self.current_turn {
            Some(player) => format!("Player {}'s Turn", player.index() + 1),
            None => "Game Over".to_string(),
        }
    }

    pub fn score_text(&self) -> String {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, score)| format!("Player {}: {}", i + 1, score))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    pub fn game_over_text(&self) -> Option<String> {
        self.winner
            .map(|winner| format!("Player {} Wins!", winner.index() + 1))
    }
}

impl GameObserver for Hud {
    fn on_cell_occupied(&mut self, pos: Pos, _player: PlayerId) {
        self.last_move = Some(pos);
        self.move_count += 1;
        self.message = None;
    }

    fn on_sequence_completed(&mut self, _player: PlayerId, sequence: &Sequence) {
        self.sequences.push(sequence.clone());
    }

    fn on_score_changed(&mut self, scores: &[u32]) {
        self.scores = scores.to_vec();
    }

    fn on_turn_changed(&mut self, player: PlayerId) {
        self.current_turn = Some(player);
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        self.current_turn = None;
        self.winner = Some(winner);
    }

    fn on_board_cleared(&mut self) {
        *self = Hud::default();
    }
}
