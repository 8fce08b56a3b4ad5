//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the session can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, has_won};
