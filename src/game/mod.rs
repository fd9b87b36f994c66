//! Session control: turn order, scoring and game-over state, plus the
//! events presentation layers consume.

mod events;
mod player;
mod session;

pub use events::{GameEvent, GameObserver};
pub use player::Player;
pub use session::{GameState, Placement, Session};
