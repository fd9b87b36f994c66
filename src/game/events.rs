//! Outbound notifications for presentation layers

use crate::board::{PlayerId, Pos};
use crate::rules::Sequence;

/// Something a presentation layer may want to redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A peg now sits at `pos`
    CellOccupied { pos: Pos, player: PlayerId },
    /// A placement completed a scoring run
    SequenceCompleted { player: PlayerId, sequence: Sequence },
    /// Scores of all players, indexed by player
    ScoreChanged { scores: Vec<u32> },
    /// It is now `player`'s turn
    TurnChanged { player: PlayerId },
    GameOver { winner: PlayerId },
    /// All pegs were removed for a new game
    BoardCleared,
}

impl GameEvent {
    /// Route the event to the matching observer callback
    pub fn dispatch<O: GameObserver + ?Sized>(&self, observer: &mut O) {
        match self {
            GameEvent::CellOccupied { pos, player } => observer.on_cell_occupied(*pos, *player),
            GameEvent::SequenceCompleted { player, sequence } => {
                observer.on_sequence_completed(*player, sequence)
            }
            GameEvent::ScoreChanged { scores } => observer.on_score_changed(scores),
            GameEvent::TurnChanged { player } => observer.on_turn_changed(*player),
            GameEvent::GameOver { winner } => observer.on_game_over(*winner),
            GameEvent::BoardCleared => observer.on_board_cleared(),
        }
    }
}

/// Callbacks for game events. Every method defaults to doing nothing.
pub trait GameObserver {
    fn on_cell_occupied(&mut self, _pos: Pos, _player: PlayerId) {}

    fn on_sequence_completed(&mut self, _player: PlayerId, _sequence: &Sequence) {}

    fn on_score_changed(&mut self, _scores: &[u32]) {}

    fn on_turn_changed(&mut self, _player: PlayerId) {}

    fn on_game_over(&mut self, _winner: PlayerId) {}

    fn on_board_cleared(&mut self) {}
}

/// Collecting events is enough for tests and simple front ends
impl GameObserver for Vec<GameEvent> {
    fn on_cell_occupied(&mut self, pos: Pos, player: PlayerId) {
        self.push(GameEvent::CellOccupied { pos, player });
    }

    fn on_sequence_completed(&mut self, player: PlayerId, sequence: &Sequence) {
        self.push(GameEvent::SequenceCompleted {
            player,
            sequence: sequence.clone(),
        });
    }

    fn on_score_changed(&mut self, scores: &[u32]) {
        self.push(GameEvent::ScoreChanged {
            scores: scores.to_vec(),
        });
    }

    fn on_turn_changed(&mut self, player: PlayerId) {
        self.push(GameEvent::TurnChanged { player });
    }

    fn on_game_over(&mut self, winner: PlayerId) {
        self.push(GameEvent::GameOver { winner });
    }

    fn on_board_cleared(&mut self) {
        self.push(GameEvent::BoardCleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Direction;

    #[derive(Default)]
    struct TurnCounter {
        turns: Vec<PlayerId>,
        winner: Option<PlayerId>,
    }

    impl GameObserver for TurnCounter {
        fn on_turn_changed(&mut self, player: PlayerId) {
            self.turns.push(player);
        }

        fn on_game_over(&mut self, winner: PlayerId) {
            self.winner = Some(winner);
        }
    }

    #[test]
    fn test_dispatch_routes_to_callbacks() {
        let mut counter = TurnCounter::default();
        let events = [
            GameEvent::CellOccupied {
                pos: Pos::new(1, 1),
                player: PlayerId::new(0),
            },
            GameEvent::TurnChanged {
                player: PlayerId::new(1),
            },
            GameEvent::GameOver {
                winner: PlayerId::new(1),
            },
        ];
        for event in &events {
            event.dispatch(&mut counter);
        }
        assert_eq!(counter.turns, vec![PlayerId::new(1)]);
        assert_eq!(counter.winner, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_vec_observer_collects_every_event() {
        let sequence = Sequence {
            player: PlayerId::new(0),
            direction: Direction::Vertical,
            positions: (0..5).map(|y| Pos::new(0, y)).collect(),
        };
        let events = vec![
            GameEvent::CellOccupied {
                pos: Pos::new(0, 4),
                player: PlayerId::new(0),
            },
            GameEvent::SequenceCompleted {
                player: PlayerId::new(0),
                sequence,
            },
            GameEvent::ScoreChanged { scores: vec![1, 0] },
            GameEvent::TurnChanged {
                player: PlayerId::new(1),
            },
            GameEvent::BoardCleared,
        ];

        let mut collected: Vec<GameEvent> = Vec::new();
        for event in &events {
            event.dispatch(&mut collected);
        }
        assert_eq!(collected, events);
    }
}
