//! Turn and score bookkeeping for one table of players

use tracing::{debug, info};

use super::events::GameEvent;
use super::player::Player;
use crate::board::{Board, PlayerId, Pos};
use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::rules::{find_sequence_through, Sequence};

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for `current` to place a peg
    InProgress { current: PlayerId },
    /// `winner` reached the win score; only a reset leaves this state
    GameOver { winner: PlayerId },
}

/// Result of an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub player: PlayerId,
    /// Run completed by this peg, if it scored
    pub sequence: Option<Sequence>,
    /// State after the placement
    pub state: GameState,
}

impl Placement {
    #[inline]
    pub fn scored(&self) -> bool {
        self.sequence.is_some()
    }
}

/// A game session: board, players, turn order and scores.
///
/// Every accepted action queues [`GameEvent`]s; presentation layers pull
/// them with [`Session::drain_events`]. Rejected actions change nothing and
/// queue nothing.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    players: Vec<Player>,
    state: GameState,
    history: Vec<Placement>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Start a session with a validated configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            players = config.players,
            width = config.width,
            height = config.height,
            win_score = config.win_score,
            "starting session"
        );

        let mut session = Self {
            board: Board::new(config.width, config.height),
            players: Self::seat_players(config.players),
            state: GameState::InProgress {
                current: PlayerId::new(0),
            },
            history: Vec::new(),
            events: Vec::new(),
            config,
        };
        session.announce_fresh_game();
        Ok(session)
    }

    fn seat_players(count: usize) -> Vec<Player> {
        (0..count).map(|i| Player::new(PlayerId::new(i))).collect()
    }

    fn announce_fresh_game(&mut self) {
        self.events.push(GameEvent::ScoreChanged {
            scores: self.scores(),
        });
        self.events.push(GameEvent::TurnChanged {
            player: PlayerId::new(0),
        });
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Scores indexed by player
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Player to move, or `None` once the game is over
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.state {
            GameState::InProgress { current } => Some(current),
            GameState::GameOver { .. } => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            GameState::GameOver { winner } => Some(winner),
            GameState::InProgress { .. } => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    /// Accepted placements of the current game, oldest first
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Take all queued events, oldest first.
    ///
    /// The queue is unbounded and only shrinks here, so callers that never
    /// drain it keep every event of the session in memory.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Place a peg for the player to move.
    ///
    /// A scoring placement awards one point; reaching the win score ends
    /// the game, otherwise the turn passes to the next player. Occupied or
    /// off-board cells are rejected without passing the turn.
    pub fn place_piece(&mut self, pos: Pos) -> Result<Placement, GameError> {
        let player = match self.state {
            GameState::InProgress { current } => current,
            GameState::GameOver { winner } => {
                debug!(%pos, %winner, "placement after game over ignored");
                return Err(GameError::GameIsOver { winner });
            }
        };

        if let Err(err) = self.board.place(pos, player) {
            debug!(%pos, %player, %err, "placement rejected");
            return Err(err);
        }
        debug!(%pos, %player, "peg placed");
        self.events.push(GameEvent::CellOccupied { pos, player });

        let sequence = find_sequence_through(&self.board, pos, player);
        if let Some(sequence) = &sequence {
            let score = self.players[player.index()].add_point();
            info!(%player, score, direction = ?sequence.direction, "sequence completed");

            self.events.push(GameEvent::SequenceCompleted {
                player,
                sequence: sequence.clone(),
            });
            self.events.push(GameEvent::ScoreChanged {
                scores: self.scores(),
            });

            if score >= self.config.win_score {
                info!(winner = %player, score, "game over");
                self.state = GameState::GameOver { winner: player };
                self.events.push(GameEvent::GameOver { winner: player });
            }
        }

        if let GameState::InProgress { current } = self.state {
            let next = current.next(self.players.len());
            self.state = GameState::InProgress { current: next };
            self.events.push(GameEvent::TurnChanged { player: next });
        }

        let placement = Placement {
            pos,
            player,
            sequence,
            state: self.state,
        };
        self.history.push(placement.clone());
        Ok(placement)
    }

    /// Clear the board and scores and hand the first turn to player 0
    pub fn reset(&mut self) {
        info!(players = self.config.players, "resetting session");
        self.board.reset();
        self.players = Self::seat_players(self.config.players);
        self.state = GameState::InProgress {
            current: PlayerId::new(0),
        };
        self.history.clear();

        self.events.push(GameEvent::BoardCleared);
        self.announce_fresh_game();
    }

    /// Change the number of players and start over
    pub fn restart_with_players(&mut self, players: usize) -> Result<(), ConfigError> {
        let config = GameConfig {
            players,
            ..self.config.clone()
        };
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }
}
