// src/noise.rs
//
// Editorial-noise filter. Catalogue pages carry entries that are nothing but
// apparatus ("3 lines unclear", "approx. 5 lines missing"); those are kept
// out of the archive unless explicitly requested.

const MIN_TEXT_CHARS: usize = 15;
const MIN_CONTENT_CHARS: usize = 20;

/// True if `text` is real proverb content; false if it is only editorial noise.
pub fn is_substantive(text: &str) -> bool {
    let t = text.trim();
    if t.chars().count() < MIN_TEXT_CHARS {
        return false;
    }

    let noise = [
        re!(r"(?i)\d+\s*lines?\s*unclear"),
        re!(r"(?i)\d+\s*lines?\s*fragmentary"),
        re!(r"(?i)unknown\s+no\.?\s*of\s*lines?\s*missing"),
        re!(r"(?i)approx\.?\s*\d+\s*lines?\s*missing"),
        re!(r"(?i)^\d+\s*lines?\s*missing\s*$"),
    ];
    let mut reduced = s!(t);
    for re in noise {
        reduced = re.replace_all(&reduced, " ").into_owned();
    }
    let reduced = re!(r"[.\s…]+").replace_all(&reduced, " ");

    reduced.trim().chars().count() >= MIN_CONTENT_CHARS
}
