// src/specs/proverbs.rs
//! Page reader for the proverb collections (`t.6.1.NN.html`).
//!
//! Each page is a translation laid out as one `<p>` per line. Lines starting
//! with a number (`1.`, `10-11.`) open a proverb; unnumbered lines continue
//! the current one. The page's own numbers are catalogue line refs, so
//! records are numbered by running index instead.

use crate::config::consts::BASE_URL;
use crate::core::html;
use crate::core::sanitize::{normalize_ws, strip_editorial};
use crate::data::Proverb;
use crate::noise::is_substantive;

/// Site navigation that opens every ETCSL proverb page.
pub const ETCSL_BOILERPLATE: &str = concat!(
    "The Electronic Text Corpus of Sumerian Literature ",
    "Catalogues: by date | by number | in full ",
    "Website info: navigation help | site description | display conventions | recent changes ",
    "Project info: consolidated bibliography | about the project | credits and copyright | links ",
    "This composition: composite text",
);

const CORPUS_TITLE: &str = "The Electronic Text Corpus";
const DEFAULT_COLLECTION: &str = "1";

/// `page_url(1)` → `.../proverbs/t.6.1.01.html`
pub fn page_url(page: u32) -> String {
    format!("{BASE_URL}t.6.1.{page:02}.html")
}

/// Composition id from a page URL (`t.6.1.01.html` → `6.1.01`), or empty.
pub fn composition_from_url(url: &str) -> String {
    re!(r"t\.(\d+\.\d+)\.(\d+)\.html")
        .captures(url)
        .map(|c| format!("{}.{}", &c[1], &c[2]))
        .unwrap_or_default()
}

/// Collection number from the page text ("Proverbs: collection 1" → "1").
pub fn collection_from_text(page_text: &str) -> String {
    [
        re!(r"(?i)proverbs:?\s*collection\s+(\d+)"),
        re!(r"(?i)collection\s+(\d+)"),
    ]
    .iter()
    .find_map(|re| re.captures(page_text).map(|c| s!(&c[1])))
    .unwrap_or_else(|| s!(DEFAULT_COLLECTION))
}

/// Drop boilerplate and note-only paragraphs, strip inline apparatus and
/// normalize whitespace. Empty results are dropped.
pub fn clean_lines<I, S>(paragraphs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for p in paragraphs {
        let line = p.as_ref();

        if line.starts_with(CORPUS_TITLE) || line.contains(ETCSL_BOILERPLATE) {
            continue;
        }
        // notes and footnotes on their own line
        if line.starts_with('(')
            || line.starts_with('{')
            || line.to_lowercase().contains("line fragmentary")
        {
            continue;
        }

        let line = normalize_ws(&strip_editorial(line));
        if !line.is_empty() {
            out.push(line);
        }
    }
    out
}

/// Group cleaned lines into proverbs, numbered 1, 2, 3, … in page order.
///
/// Lines before the first numbered line form a block of their own. Blocks
/// left with no text are dropped and do not consume a number.
pub fn split_into_proverbs<S: AsRef<str>>(lines: &[S]) -> Vec<(u32, String)> {
    let marker = re!(r"^(\d+)(?:-\d+)?\.\s*");

    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Option<Vec<String>> = None;

    for line in lines {
        let line = line.as_ref();
        if let Some(m) = marker.find(line) {
            if let Some(done) = current.take() {
                push_block(&mut blocks, done);
            }
            let rest = line[m.end()..].trim();
            current = Some(if rest.is_empty() { Vec::new() } else { vec![s!(rest)] });
        } else {
            let block = current.get_or_insert_with(Vec::new);
            let line = line.trim();
            if !line.is_empty() {
                block.push(s!(line));
            }
        }
    }
    if let Some(done) = current {
        push_block(&mut blocks, done);
    }

    blocks
        .into_iter()
        .zip(1u32..)
        .map(|(block, n)| (n, block.join(" ")))
        .collect()
}

fn push_block(blocks: &mut Vec<Vec<String>>, block: Vec<String>) {
    if block.iter().any(|s| !s.trim().is_empty()) {
        blocks.push(block);
    }
}

/// Full pipeline for one fetched page.
pub fn parse_proverb_page(doc: &str, url: &str, include_editorial_noise: bool) -> Vec<Proverb> {
    let collection = collection_from_text(&html::page_text(doc));
    let composition = composition_from_url(url);

    let lines = clean_lines(html::paragraph_texts(doc));
    let blocks = split_into_proverbs(&lines);
    logd!("{composition}: {} lines, {} blocks", lines.len(), blocks.len());

    blocks
        .into_iter()
        .filter(|(_, text)| include_editorial_noise || is_substantive(text))
        .map(|(n, text)| Proverb::new(&collection, n, &composition, text))
        .collect()
}
