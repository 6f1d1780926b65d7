// src/model/mod.rs
//! Generative side: a small text model trained on the archive, plus the
//! filtering that turns raw samples into presentable proverbs.

mod ngram;
pub mod quality;

pub use ngram::NgramModel;

use rand::Rng;

use crate::data::Proverb;
use crate::error::{Error, Result};
use crate::noise::is_substantive;
use quality::{first_sentence, is_acceptable, letter_score, sanitize_generated};

/// Anything that can produce raw proverb-like text on demand.
pub trait TextModel {
    /// One raw sample. Lower `temperature` means more conservative output;
    /// `0.0` or below is greedy.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, temperature: f64) -> String;
}

/// Texts worth learning from: substantive proverbs only, trimmed.
pub fn training_texts(archive: &[Proverb]) -> Result<Vec<String>> {
    let texts: Vec<String> = archive
        .iter()
        .map(|p| p.text.trim())
        .filter(|t| is_substantive(t))
        .map(String::from)
        .collect();
    if texts.is_empty() {
        return Err(Error::NoTrainingText);
    }
    Ok(texts)
}

/// Sample up to `max_retries` times and return the first acceptable proverb.
/// If none passes, return the best-looking one (letter ratio × length), or
/// failing that the last sample.
pub fn generate_proverb<M, R>(model: &M, rng: &mut R, temperature: f64, max_retries: usize) -> String
where
    M: TextModel,
    R: Rng + ?Sized,
{
    let mut best: Option<(f64, String)> = None;
    let mut last = s!();

    for attempt in 0..max_retries.max(1) {
        let text = sanitize_generated(&first_sentence(&model.sample(rng, temperature)));
        if is_acceptable(&text) {
            logd!("accepted sample after {} attempt(s)", attempt + 1);
            return text;
        }
        if let Some(score) = letter_score(&text) {
            if best.as_ref().is_none_or(|(b, _)| score > *b) {
                best = Some((score, text.clone()));
            }
        }
        last = text;
    }

    logw!("no acceptable sample in {max_retries} attempts; using best effort");
    best.map(|(_, t)| t).unwrap_or(last)
}
