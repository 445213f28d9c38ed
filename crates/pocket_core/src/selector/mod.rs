//! Time-aware content selection and mini-game rules.
//!
//! # Responsibility
//! - Pick a time-appropriate advice entry from the static catalog.
//! - Score mini-game answers.
//!
//! # Invariants
//! - Every function here is pure apart from the injected random source.
//! - Scoring never lowers a score.

use crate::model::advice::{AdviceEntry, TimeOfDay};
use rand::Rng;

/// Expected answer of the "guess the emotion" game.
pub const EMOTION_ANSWER: &str = "радость";
/// Points granted for a correct emotion answer.
pub const EMOTION_INCREMENT: u32 = 10;
/// Answers offered by the emotion game.
pub const EMOTION_CHOICES: &[&str] = &["радость", "грусть", "злость", "удивление"];

/// Words offered by the association game.
pub const ASSOCIATION_WORDS: &[&str] = &["Тепло", "Дом", "Холод", "Комфорт", "Стресс", "Спокойствие"];
const ASSOCIATION_CORRECT: &[&str] = &["Тепло", "Дом", "Комфорт", "Спокойствие"];

/// Result of scoring one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub new_score: u32,
    pub correct: bool,
}

/// Maps a local hour to its time bucket (`<12`, `<18`, rest).
pub fn time_of_day(hour: u32) -> TimeOfDay {
    TimeOfDay::from_hour(hour)
}

/// Greeting line shown for a time bucket.
pub fn greeting(bucket: TimeOfDay) -> &'static str {
    match bucket {
        TimeOfDay::Morning => "Доброе утро",
        TimeOfDay::Day => "Добрый день",
        TimeOfDay::Evening => "Добрый вечер",
    }
}

/// Picks advice for `hour` uniformly among entries of the matching bucket.
///
/// Falls back to a uniform pick over the whole catalog when the bucket has no
/// entry. Returns `None` only for an empty catalog.
pub fn pick_advice<'a, R: Rng>(
    catalog: &'a [AdviceEntry],
    hour: u32,
    rng: &mut R,
) -> Option<&'a AdviceEntry> {
    let bucket = time_of_day(hour);
    let matching: Vec<&AdviceEntry> = catalog
        .iter()
        .filter(|entry| entry.time_of_day == bucket)
        .collect();

    if matching.is_empty() {
        if catalog.is_empty() {
            return None;
        }
        return catalog.get(rng.gen_range(0..catalog.len()));
    }

    matching.get(rng.gen_range(0..matching.len())).copied()
}

/// Scores one answer: exact match adds `increment`, anything else keeps the
/// score unchanged.
pub fn score_answer(submitted: &str, expected: &str, current: u32, increment: u32) -> ScoreOutcome {
    if submitted == expected {
        ScoreOutcome {
            new_score: current.saturating_add(increment),
            correct: true,
        }
    } else {
        ScoreOutcome {
            new_score: current,
            correct: false,
        }
    }
}

/// Checks a word of the association game. Does not affect the score.
pub fn check_association(word: &str) -> bool {
    ASSOCIATION_CORRECT.contains(&word)
}
