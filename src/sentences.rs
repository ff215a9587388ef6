//! Built-in sentences for word-maze levels, used when the caller has none.

use crate::constants::MAX_SENTENCE_LEVEL;
use rand::seq::SliceRandom;
use rand::Rng;

const LEVEL_1: &[&str] = &["WIN THE GAME", "RUN TO WIN", "GET THE SUN", "CAT AND DOG"];
const LEVEL_2: &[&str] = &[
    "PLAY THE MAZE GAME",
    "JUMP TO THE GOAL",
    "MOVE FAST TO WIN",
    "WORD PUZZLE FUN",
];
const LEVEL_3: &[&str] = &[
    "QUEST FOR MAGIC POWER",
    "BRAVE AND SMART HERO",
    "FOCUS ON THE PRIZE",
    "SPEED IS THE KEY",
];
const LEVEL_4: &[&str] = &[
    "VICTORY AWAITS THE BRAVE",
    "AMAZING CREATIVE TRIUMPH",
    "PERFECT STELLAR SUCCESS",
    "AWESOME PUZZLE SOLVER",
];
const LEVEL_5: &[&str] = &[
    "OUTSTANDING MAGNIFICENT ACHIEVEMENT",
    "EXTRAORDINARY BRILLIANT PERFORMANCE",
    "SPECTACULAR PHENOMENAL VICTORY",
    "INCREDIBLE MARVELOUS QUEST",
];

/// Sentences for a level. Level 0 reads as 1, levels past the last reuse the last list.
pub fn sentences_for_level(level: u32) -> &'static [&'static str] {
    match level.clamp(1, MAX_SENTENCE_LEVEL) {
        1 => LEVEL_1,
        2 => LEVEL_2,
        3 => LEVEL_3,
        4 => LEVEL_4,
        _ => LEVEL_5,
    }
}

pub fn sentence_for_level(level: u32, rng: &mut impl Rng) -> &'static str {
    sentences_for_level(level)
        .choose(rng)
        .copied()
        .unwrap_or(LEVEL_1[0])
}
