//! The library components of the game. They allow initializing the game, taking input, drawing a
//! secret word and keeping track of a round of hangman.
//!
//! The starting point of the library is the game.rs file, which contains the main game loop. The
//! state of a round lives in session.rs and never touches the terminal.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The package has not yet been pushed to a remote."
)]

mod art;
mod game;
mod input;
mod logging;
mod session;
mod words;

pub use game::init;
