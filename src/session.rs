//! The session module holds the state of a single round of hangman: the secret word and every
//! letter the player has tried so far.
//!
//! Nothing in here touches the terminal. The game loop feeds letters into a `Session` and asks it
//! whether the round is over and what the board looks like.

use console::style;
use thiserror::Error;

/// The number of misses it takes to fill the gallows and lose the round.
pub(crate) const MAX_MISSES: usize = 6;

/// The character drawn in place of a letter that has not been guessed yet.
const PLACEHOLDER: char = '_';

/// This structure holds everything needed to draw the current state of a round. It is produced by
/// `Session::render()` and owns its data, so the session can keep changing afterwards.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Board {
    /// The letters found in the word, in the order they were guessed.
    hits: Vec<char>,
    /// The secret word with every unguessed letter replaced by a placeholder, one space between
    /// each character.
    masked: String,
    /// The letters not found in the word, in the order they were guessed.
    misses: Vec<char>,
}

impl Board {
    /// Returns the letters found in the word, in guess order.
    pub(crate) const fn hits(&self) -> &[char] {
        self.hits.as_slice()
    }

    /// Returns the masked word, e.g. `c a _`.
    pub(crate) const fn masked(&self) -> &str {
        self.masked.as_str()
    }

    /// Returns the letters not found in the word, in guess order.
    pub(crate) const fn misses(&self) -> &[char] {
        self.misses.as_slice()
    }
}

/// This enum holds the outcome of recording a single letter with `Session::record_guess()`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Guess {
    /// The round was already won or lost, so the letter was not recorded.
    Finished,
    /// The letter is part of the word and has been revealed.
    Hit,
    /// The letter is not part of the word and counts towards the gallows.
    Miss,
    /// The letter had been tried before. Nothing changed and no miss was spent.
    Repeated,
}

/// This struct is the state of a round: the word to guess and the letters tried so far.
///
/// `hits` and `misses` are disjoint. A letter lands in at most one of them, and only once.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    /// Letters found in the word.
    hits: Vec<char>,
    /// Letters not found in the word.
    misses: Vec<char>,
    /// The lowercase secret word.
    word: String,
}

/// This enum represents where a round stands. `Won` and `Lost` are terminal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Status {
    /// There are letters left to find and misses left to spend.
    InProgress,
    /// The gallows are full.
    Lost,
    /// Every letter of the word has been found.
    Won,
}

/// The errors that can come up when building a session out of a word.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum WordError {
    /// The word had nothing to guess in it.
    #[error("{}", style("the secret word cannot be empty").bold().underlined())]
    Empty,
}

impl Session {
    /// Returns `true` once the player has spent every miss.
    pub(crate) const fn is_lost(&self) -> bool {
        self.misses.len() == MAX_MISSES
    }

    /// Returns `true` if the round has been either won or lost.
    pub(crate) fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    /// Returns `true` if every letter of the word has been guessed. Spaces never need guessing.
    pub(crate) fn is_won(&self) -> bool {
        self.word
            .chars()
            .filter(|ch| *ch != ' ')
            .all(|ch| self.hits.contains(&ch))
    }

    /// Returns the number of misses so far, which doubles as the index into the gallows art.
    pub(crate) const fn misses(&self) -> usize {
        self.misses.len()
    }

    /// Builds a fresh session for the given word, lowercasing it on the way in.
    ///
    /// # Errors
    ///
    /// Returns `WordError::Empty` if the word is empty or made up only of whitespace.
    pub(crate) fn new(word: &str) -> Result<Self, WordError> {
        if word.trim().is_empty() {
            return Err(WordError::Empty);
        }

        Ok(Self {
            hits: Vec::new(),
            misses: Vec::new(),
            word: word.to_lowercase(),
        })
    }

    /// Records a guess. The letter is expected to be a single lowercase alphabetic character; the
    /// input layer takes care of that.
    ///
    /// A letter that was tried before is a free turn: neither list changes.
    pub(crate) fn record_guess(&mut self, letter: char) -> Guess {
        if self.is_over() {
            return Guess::Finished;
        }

        if self.hits.contains(&letter) || self.misses.contains(&letter) {
            return Guess::Repeated;
        }

        if self.word.contains(letter) {
            self.hits.push(letter);
            Guess::Hit
        } else {
            self.misses.push(letter);
            Guess::Miss
        }
    }

    /// Produces the board for the current state. Only spaces and guessed letters are revealed.
    pub(crate) fn render(&self) -> Board {
        let masked = self
            .word
            .chars()
            .map(|ch| {
                if ch == ' ' || self.hits.contains(&ch) {
                    ch.to_string()
                } else {
                    PLACEHOLDER.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");

        Board {
            hits: self.hits.clone(),
            masked,
            misses: self.misses.clone(),
        }
    }

    /// Returns the position of the round in its state machine.
    pub(crate) fn status(&self) -> Status {
        if self.is_won() {
            Status::Won
        } else if self.is_lost() {
            Status::Lost
        } else {
            Status::InProgress
        }
    }

    /// Returns the secret word.
    pub(crate) fn word(&self) -> &str {
        &self.word
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{Guess, Session, Status, WordError, MAX_MISSES};

    fn session(word: &str) -> Session {
        Session::new(word).expect("test words are never empty")
    }

    fn guess_all(session: &mut Session, letters: &str) {
        for letter in letters.chars() {
            let _outcome = session.record_guess(letter);
        }
    }

    #[test]
    fn cat_is_revealed_then_won() {
        let mut game = session("cat");
        guess_all(&mut game, "ca");

        assert_eq!(game.render().masked(), "c a _", "only guessed letters show");
        assert!(!game.is_won(), "t is still hidden");

        assert_eq!(game.record_guess('t'), Guess::Hit, "t is in cat");
        assert!(game.is_won(), "every letter has been found");
        assert!(!game.is_lost(), "no misses were spent");
        assert_eq!(game.status(), Status::Won, "won is terminal");
    }

    #[test]
    fn six_misses_lose_the_round() {
        let mut game = session("dog");
        guess_all(&mut game, "qwerty");

        assert!(game.is_lost(), "six misses fill the gallows");
        assert!(!game.is_won(), "nothing was revealed");
        assert!(game.is_over(), "a lost round is over");
        assert_eq!(game.misses(), MAX_MISSES, "every wrong letter counted");
    }

    #[test]
    fn miss_order_does_not_matter() {
        for order in ["qwerty", "ytrewq", "rqeywt"] {
            let mut game = session("dog");
            guess_all(&mut game, order);
            assert!(game.is_lost(), "order {order} should lose");
        }
    }

    #[test]
    fn five_misses_keep_the_round_going() {
        let mut game = session("dog");
        guess_all(&mut game, "qwert");

        assert_eq!(game.status(), Status::InProgress, "one miss left");
    }

    #[test]
    fn repeated_letters_are_free() {
        let mut game = session("apple");
        guess_all(&mut game, "pz");

        assert_matches!(game.record_guess('p'), Guess::Repeated);
        assert_matches!(game.record_guess('z'), Guess::Repeated);

        let board = game.render();
        assert_eq!(board.hits(), vec!['p'], "hit recorded once");
        assert_eq!(board.misses(), vec!['z'], "miss recorded once");
        assert_eq!(game.misses(), 1, "repeat did not spend a miss");
    }

    #[test]
    fn hits_and_misses_stay_disjoint() {
        let mut game = session("banana");
        guess_all(&mut game, "abxnbxa");

        let board = game.render();
        assert!(
            board.hits().iter().all(|letter| !board.misses().contains(letter)),
            "no letter is both a hit and a miss"
        );
        assert_eq!(board.hits(), vec!['a', 'b', 'n'], "hits keep guess order");
        assert_eq!(board.misses(), vec!['x'], "misses keep guess order");
    }

    #[test]
    fn spaces_are_shown_and_never_guessed() {
        let mut game = session("ice cream");
        assert_eq!(
            game.render().masked(),
            "_ _ _   _ _ _ _ _",
            "the gap between words is visible"
        );

        guess_all(&mut game, "icerm");
        assert_eq!(game.render().masked(), "i c e   c r e _ m", "a is still hidden");
        assert!(!game.is_won(), "a is missing");

        assert_eq!(game.record_guess('a'), Guess::Hit, "a is in cream");
        assert!(game.is_won(), "spaces do not need guessing");
    }

    #[test]
    fn render_only_reveals_hits() {
        let mut game = session("hangman");
        guess_all(&mut game, "nzq");

        let board = game.render();
        for shown in board.masked().chars().filter(|ch| *ch != ' ' && *ch != '_') {
            assert!(board.hits().contains(&shown), "{shown} was revealed without a hit");
        }
        assert_eq!(board.masked(), "_ _ n _ _ _ n", "both n's show up");
    }

    #[test]
    fn terminal_states_ignore_guesses() {
        let mut won = session("ox");
        guess_all(&mut won, "ox");
        assert_matches!(won.record_guess('z'), Guess::Finished);
        assert_eq!(won.misses(), 0, "a won round takes no more misses");

        let mut lost = session("ox");
        guess_all(&mut lost, "abcdef");
        assert_matches!(lost.record_guess('o'), Guess::Finished);
        assert_eq!(lost.status(), Status::Lost, "a lost round stays lost");
    }

    #[test]
    fn words_are_lowercased() {
        let mut game = session("Rust");
        assert_eq!(game.word(), "rust", "word is normalized");
        assert_eq!(game.record_guess('r'), Guess::Hit, "uppercase R matches r");
    }

    #[test]
    fn blank_words_are_rejected() {
        assert_matches!(Session::new(""), Err(WordError::Empty));
        assert_matches!(Session::new("   "), Err(WordError::Empty));
    }
}
