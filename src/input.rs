//! This module contains all functions related to taking input from the player. They all use the
//! `dialoguer` crate to read a line, and they all check it before handing it over.
//!
//! The checks themselves are plain functions returning an `InputError`, so the prompts can show
//! the error and ask again while the rest of the game only ever sees valid values.

use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use thiserror::Error;

/// This enum holds every way the player can answer a prompt wrongly. The messages are shown right
/// under the prompt before it asks again.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum InputError {
    /// The answer to a yes or no question was neither.
    #[error("{}", style("Invalid Input. Try again.").bold())]
    InvalidAnswer,
    /// The player name was left blank.
    #[error("{}", style("Player Name Required!").bold())]
    MissingName,
    /// The guess was a single character, but not a letter.
    #[error("{}", style("Only alphabetic characters are allowed!").bold())]
    NotAlphabetic,
    /// The guess was empty or longer than one character.
    #[error("{}", style("No blanks and only a single letter!").bold())]
    NotSingleLetter,
}

/// This function asks a yes or no question until it gets an answer it understands.
pub(crate) fn take_answer(term: &Term, question: &str) -> Result<bool> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style(question).bold()))
        .allow_empty(true)
        .validate_with(|input: &String| validate_answer(input).map(|_| ()))
        .interact_text_on(term)?;

    Ok(validate_answer(&input)?)
}

/// This function asks for the next guess until the player types a single letter. The letter is
/// returned in lowercase.
pub(crate) fn take_letter(term: &Term) -> Result<char> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Guess a letter").bold()))
        .allow_empty(true)
        .validate_with(|input: &String| validate_letter(input).map(|_| ()))
        .interact_text_on(term)?;

    Ok(validate_letter(&input)?)
}

/// This function asks for the name of the player, which is used in the closing message of the
/// round.
pub(crate) fn take_name(term: &Term) -> Result<String> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{}", style("Enter your name").bold()))
        .allow_empty(true)
        .validate_with(|input: &String| validate_name(input).map(|_| ()))
        .interact_text_on(term)?;

    Ok(validate_name(&input)?)
}

/// Maps `yes`, `y`, `no` and `n`, in any casing, to a boolean.
pub(crate) fn validate_answer(input: &str) -> Result<bool, InputError> {
    match input.to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(InputError::InvalidAnswer),
    }
}

/// Checks that the input is exactly one ASCII letter and returns it lowercased. Length is checked
/// first, so an empty line or a word gets the "single letter" message even if it holds digits.
pub(crate) fn validate_letter(input: &str) -> Result<char, InputError> {
    let mut chars = input.chars();

    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Ok(letter.to_ascii_lowercase()),
        (Some(_), None) => Err(InputError::NotAlphabetic),
        _ => Err(InputError::NotSingleLetter),
    }
}

/// Accepts any name with at least one visible character. A name made only of whitespace counts
/// as missing, even though it is not empty.
pub(crate) fn validate_name(input: &str) -> Result<String, InputError> {
    if input.trim().is_empty() {
        Err(InputError::MissingName)
    } else {
        Ok(input.to_owned())
    }
}
