//! # hangman
//!
//! This crate is a game of hangman played in the terminal. A word is drawn at random and you guess
//! it one letter at a time. Every wrong letter adds a piece to the gallows, and six of them end the
//! round.
//!
//! Once a round is over you are asked whether you want another one.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use anyhow::Result;
use hangman::init;

fn main() -> Result<()> {
    init()
}
