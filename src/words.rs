//! This module holds the pool of secret words and the function that draws one of them for a round.

use fastrand::Rng;

/// The candidate words. Every entry is lowercase and may contain spaces between words, which are
/// shown to the player from the start.
pub(crate) const WORDS: &[&str] = &[
    "abruptly",
    "absurd",
    "avenue",
    "awkward",
    "bagpipes",
    "banjo",
    "beekeeper",
    "blizzard",
    "boxcar",
    "buffalo",
    "buzzard",
    "cobweb",
    "cycle",
    "dizzy",
    "duplex",
    "espionage",
    "fishhook",
    "fjord",
    "funny",
    "galaxy",
    "gazebo",
    "glowworm",
    "gossip",
    "haiku",
    "hyphen",
    "ice cream",
    "ivory",
    "jackpot",
    "jazz",
    "jigsaw",
    "jukebox",
    "kayak",
    "keyhole",
    "kiosk",
    "knapsack",
    "lucky",
    "luxury",
    "matrix",
    "megahertz",
    "microwave",
    "mystify",
    "nightclub",
    "nowadays",
    "oxygen",
    "pajama",
    "peekaboo",
    "pixel",
    "puppy",
    "quartz",
    "quiz",
    "rhythm",
    "rocket ship",
    "scratch",
    "snazzy",
    "sphinx",
    "strength",
    "subway",
    "swivel",
    "thumbscrew",
    "topaz",
    "twelfth",
    "unzip",
    "vodka",
    "vortex",
    "walkway",
    "wave",
    "whiskey",
    "wizard",
    "wristwatch",
    "yacht",
    "youthful",
    "zigzag",
    "zombie",
];

/// Draws one word out of the pool, uniformly at random. Returns `None` only for an empty pool.
pub(crate) fn pick<'words>(rng: &mut Rng, words: &[&'words str]) -> Option<&'words str> {
    rng.choice(words.iter().copied())
}
