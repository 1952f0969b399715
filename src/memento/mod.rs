//! # Snapshots
//!
//! Flat key/value snapshots of an originator's state and the stores that
//! keep them.
//!
//! A [`Memento`] maps field names to string values. Types that can be
//! captured implement [`MementoConvertible`]. Snapshots are kept in a
//! [`CheckpointStore`] that the caller creates and passes in; nothing here
//! reaches for process-wide storage.
//!
//! ```rust
//! use behavior_kit::memento::{restore_checkpoint, save_checkpoint, GameState, InMemoryCheckpointStore};
//!
//! # fn main() -> Result<(), behavior_kit::memento::MementoError> {
//! let store = InMemoryCheckpointStore::new();
//! let mut game = GameState::new("chapter 1", "dragon saber");
//! save_checkpoint(&store, "save1", &game);
//!
//! game.chapter = "chapter 2".to_string();
//! let restored: Option<GameState> = restore_checkpoint(&store, "save1")?;
//! assert_eq!(restored.unwrap().chapter, "chapter 1");
//! # Ok(())
//! # }
//! ```

pub mod checkpoint;
pub mod errors;
pub mod game_state;
pub mod snapshot;

pub use checkpoint::{restore_checkpoint, save_checkpoint, CheckpointStore, InMemoryCheckpointStore};
pub use errors::{MementoError, MementoResult};
pub use game_state::GameState;
pub use snapshot::{Memento, MementoConvertible};
