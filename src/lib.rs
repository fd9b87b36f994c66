//! Peg Gomoku
//!
//! A five-in-a-row board game for 2 to 4 players:
//! - Rectangular board, 15x15 by default
//! - Players take turns placing one peg each
//! - A peg that completes 5+ in a row through it scores one point
//! - First player to reach the win score (2 by default) wins
//!
//! # Architecture
//!
//! - [`board`]: Board grid and coordinates
//! - [`rules`]: Sequence detection through a placed peg
//! - [`game`]: Session state machine, scores and outbound events
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types
//! - [`ui`]: Desktop front end built on egui
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameEvent, Pos, Session};
//!
//! let mut session = Session::new(GameConfig::default()).unwrap();
//!
//! // Player 1 builds a row while Player 2 plays elsewhere
//! for x in 0..5 {
//!     session.place_piece(Pos::new(x, 0)).unwrap();
//!     if x < 4 {
//!         session.place_piece(Pos::new(x * 2, 10)).unwrap();
//!     }
//! }
//! assert_eq!(session.scores(), vec![1, 0]);
//!
//! for event in session.drain_events() {
//!     if let GameEvent::ScoreChanged { scores } = event {
//!         println!("scores: {scores:?}");
//!     }
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, PlayerId, Pos};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{GameEvent, GameObserver, GameState, Placement, Player, Session};
pub use rules::{has_winning_sequence_through, Sequence};
