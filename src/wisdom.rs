// src/wisdom.rs

/// Deterministic "wisdom" heuristic for a proverb, 1..=10.
///
/// Starts at 4 and adds a point each for: a question mark, a moderate length
/// (8–25 words), clause punctuation (`,` or `;`), a contrast word and quoted
/// speech.
pub fn wisdom_score(text: &str) -> u8 {
    let words = text.split_whitespace().count();
    let lower = text.to_lowercase();

    let mut score: i32 = 4;
    if text.contains('?') {
        score += 1;
    }
    if (8..=25).contains(&words) {
        score += 1;
    }
    if text.contains(',') || text.contains(';') {
        score += 1;
    }
    // one bonus, however many contrasts
    if [" not ", " but ", " though ", " yet ", " or "].iter().any(|c| lower.contains(c)) {
        score += 1;
    }
    if text.contains('"') {
        score += 1;
    }
    score.clamp(1, 10) as u8
}
