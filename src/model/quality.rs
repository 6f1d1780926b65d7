// src/model/quality.rs
//! Output filters for generated text.

use crate::core::sanitize::normalize_ws;

pub const MIN_ACCEPTABLE_LENGTH: usize = 15;
pub const MIN_LETTER_RATIO: f64 = 0.35;
/// Max punctuation/symbols at the start before real content.
pub const MAX_LEADING_JUNK: usize = 2;
/// Max run of one repeated dot/underscore/?/!/- character.
pub const MAX_REPEAT_RUN: usize = 4;

const KEPT_PUNCT: &str = ".,!?'\"-;:()";
const LEADING_JUNK: &str = "._!?-\"'";
const RUN_CHARS: &str = "._?!-";

/// Keep ASCII letters, digits, whitespace and common English punctuation;
/// collapse whitespace and drop punctuation left dangling at the start
/// (", a house..." → "a house...").
pub fn sanitize_generated(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || KEPT_PUNCT.contains(*c))
        .collect();
    normalize_ws(&kept)
        .trim_start_matches(|c: char| c.is_whitespace() || KEPT_PUNCT.contains(c))
        .trim()
        .to_string()
}

/// Cut a raw sample at its first line break, `". "` or `!` (checked in
/// that order), keeping the terminal punctuation.
pub fn first_sentence(text: &str) -> String {
    let rest = text.trim();
    for sep in ["\n", ". ", "!"] {
        if let Some(i) = rest.find(sep) {
            let cut = format!("{}{}", rest[..i].trim(), sep.trim());
            return if cut.is_empty() { s!(rest) } else { cut };
        }
    }
    s!(rest)
}

/// False if the text looks like junk: too short, punctuation soup, ellipses,
/// too few letters, or stray CJK/fullwidth punctuation.
pub fn is_acceptable(text: &str) -> bool {
    let t = text.trim();
    let len = t.chars().count();
    if len < MIN_ACCEPTABLE_LENGTH {
        return false;
    }

    let lead: String = t
        .chars()
        .take_while(|c| c.is_whitespace() || LEADING_JUNK.contains(*c))
        .collect();
    if lead.trim_end().chars().count() > MAX_LEADING_JUNK {
        return false;
    }

    match letter_ratio(t) {
        Some(r) if r >= MIN_LETTER_RATIO => {}
        _ => return false,
    }

    if longest_run(t, RUN_CHARS) > MAX_REPEAT_RUN {
        return false;
    }
    if t.matches('.').count() >= len / 2 {
        return false;
    }
    if t.chars().any(|c| matches!(c, '\u{3000}'..='\u{303f}' | '\u{ff00}'..='\u{ffef}')) {
        return false;
    }
    true
}

/// Ranking for rejected samples: letter ratio (ignoring whitespace) times
/// length. `None` when there is nothing but whitespace.
pub fn letter_score(text: &str) -> Option<f64> {
    letter_ratio(text).map(|r| r * text.chars().count() as f64)
}

fn letter_ratio(text: &str) -> Option<f64> {
    let (mut letters, mut total) = (0usize, 0usize);
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if c.is_alphabetic() {
            letters += 1;
        }
    }
    (total > 0).then(|| letters as f64 / total as f64)
}

/// Length of the longest run of one character from `set` ("a!!!b" → 3).
fn longest_run(text: &str, set: &str) -> usize {
    let mut best = 0;
    let mut run = 0;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        run = if !set.contains(c) {
            0
        } else if Some(c) == prev {
            run + 1
        } else {
            1
        };
        best = best.max(run);
        prev = Some(c);
    }
    best
}
