//! The game module contains the core parts of the game, except for input handling and the state of
//! a round.
//!
//! It contains the `init()` function to set up the terminal and run the game loop, the greeting,
//! and the frames drawn between guesses.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use console::{pad_str, style, Alignment, Term};
use fastrand::Rng;
use tracing::{debug, info, trace};

use crate::art::{stage, LOGO};
use crate::input::{take_answer, take_letter, take_name};
use crate::logging;
use crate::session::{Guess, Session, Status};
use crate::words::{pick, WORDS};

/// Width of the column the greeting is centered in.
const GREETING_WIDTH: usize = 50;

/// This struct holds the command-line arguments. The game itself is played entirely through
/// prompts, so the only option is about diagnostics.
#[derive(Parser)]
#[command(name = "hangman", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// A file to append diagnostic logs to.
    ///
    /// Nothing is logged unless this is set. The log level can be tuned with RUST_LOG and defaults
    /// to info.
    #[arg(long)]
    #[arg(env = "HANGMAN_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Initializes the game and runs rounds until the player declines a rematch. This is a `main()`
/// function of sorts, though it is still called from main.rs.
///
/// The random number generator is created once and reused across rounds.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error, when the terminal can't be written to or read from
/// - dialoguer::Error
/// - an error opening the log file given on the command line
pub fn init() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        logging::init(path)?;
    }

    let term = Term::stdout();
    let mut rng = Rng::new();
    term.set_title("hangman");

    // game loop
    loop {
        term.clear_screen()?;
        play_round(&term, &mut rng, WORDS)?;

        if !take_answer(&term, "Would you like to play Hangman again? (Y/N)")? {
            break;
        }
    }

    info!("player left the game");
    term.write_line(&format!("\n\n{}\n", style("-----Program Exited-----").bold()))?;
    Ok(())
}

/// This function prints the logo and the welcome banner shown at the start of every round.
fn greet(term: &Term) -> Result<()> {
    let banner = format!("{}", style(" ----- WELCOME TO HANGMAN! -----").bold());

    term.write_line(LOGO)?;
    term.write_line(&pad_str(&banner, GREETING_WIDTH, Alignment::Center, None))?;
    term.write_line("")?;
    Ok(())
}

/// Joins letters into a comma separated list for the status frame.
fn letter_list(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// This function plays a single round: it asks for the player's name, draws a word from `words`
/// and takes guesses until the round is won or lost.
fn play_round(term: &Term, rng: &mut Rng, words: &[&str]) -> Result<()> {
    greet(term)?;
    let name = take_name(term)?;

    let word = pick(rng, words).context("there are no words to pick from")?;
    let mut session = Session::new(word)?;
    debug!(letters = word.len(), "round started");

    // shown once on the frame after a repeated guess
    let mut notice = None;

    while !session.is_over() {
        term.clear_screen()?;
        term.write_line(&status_frame(&session))?;

        if let Some(text) = notice.take() {
            term.write_line(text)?;
        }

        let letter = take_letter(term)?;
        let outcome = session.record_guess(letter);
        debug!(%letter, ?outcome, misses = session.misses(), "guess recorded");

        if outcome == Guess::Repeated {
            trace!(%letter, "letter was already guessed");
            notice = Some("\nYou have already guessed that letter!\n");
        }
    }

    term.clear_screen()?;
    term.write_line(&status_frame(&session))?;

    if let Some(message) = result_message(&session, &name) {
        term.write_line(&message)?;
    }

    info!(status = ?session.status(), misses = session.misses(), "round finished");
    Ok(())
}

/// Produces the closing message of a round, revealing the word. Returns `None` while the round is
/// still being played.
fn result_message(session: &Session, name: &str) -> Option<String> {
    let verdict = match session.status() {
        Status::InProgress => return None,
        Status::Lost => format!("You lost the game, {name}, Better luck next time!"),
        Status::Won => format!("Congratulations, {name}, you guessed the word!"),
    };

    Some(format!(
        "\n\n{verdict}\n\nThe word was {}.",
        style(session.word()).bold()
    ))
}

/// Draws the gallows, both letter lists and the masked word for the current state of a round.
fn status_frame(session: &Session) -> String {
    let board = session.render();

    format!(
        "{}\n\nIncorrect Guesses: {}\n\nLetters Guessed: {}\n\nSecret Word: {}",
        stage(session.misses()),
        letter_list(board.misses()),
        letter_list(board.hits()),
        board.masked(),
    )
}
