//! Game rules for peg gomoku
//!
//! Scoring is decided by sequence detection through the last placed peg.

pub mod win;

// Re-exports for convenient access
pub use win::{
    find_sequence_through, has_winning_sequence_through, run_length_through, Direction, Sequence,
    SEQUENCE_LENGTH,
};
