//! This module contains the ASCII art drawn around the game: the title logo and the gallows, one
//! stage per miss.

/// The title banner shown when a round starts.
pub(crate) const LOGO: &str = r"
 _
| |__   __ _ _ __   __ _ _ __ ___   __ _ _ __
| '_ \ / _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
| | | | (_| | | | | (_| | | | | | | (_| | | | |
|_| |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                   |___/";

/// The gallows, indexed by the number of misses. The first entry is the empty gallows and the last
/// one is the full figure drawn on the final miss.
const STAGES: [[&str; 7]; 7] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=========",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=========",
    ],
];

/// Returns the gallows drawing for a number of misses. Counts past the last stage get the full
/// figure.
pub(crate) fn stage(misses: usize) -> String {
    STAGES
        .get(misses)
        .or_else(|| STAGES.last())
        .map(|lines| lines.join("\n"))
        .unwrap_or_default()
}
