// src/model/ngram.rs
// Word-level n-gram model: counts of "next word" for every window of
// `order` preceding words, sampled with temperature.

use std::collections::BTreeMap;
use std::{fs, io, path::Path};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::TextModel;
use crate::config::consts::{MAX_NEW_TOKENS, MODEL_FILE};
use crate::error::{Error, Result};

const START: &str = "<s>";
const END: &str = "</s>";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NgramModel {
    order: usize,
    /// state (words joined by a space) → next word → count
    transitions: BTreeMap<String, BTreeMap<String, u32>>,
}

impl NgramModel {
    pub fn train<I, S>(texts: I, order: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let order = order.max(1);
        let mut transitions: BTreeMap<String, BTreeMap<String, u32>> = BTreeMap::new();

        for text in texts {
            let words: Vec<&str> = text.as_ref().split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = std::iter::repeat_n(START, order)
                .chain(words)
                .chain(std::iter::once(END))
                .collect();

            for window in tokens.windows(order + 1) {
                let (state, next) = window.split_at(order);
                *transitions
                    .entry(state.join(" "))
                    .or_default()
                    .entry(s!(next[0]))
                    .or_insert(0) += 1;
            }
        }

        Self { order, transitions }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Write `<dir>/model.json`, creating `dir`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(MODEL_FILE);
        fs::write(&path, serde_json::to_vec_pretty(self)?)?;
        logf!("model saved to {}", path.display());
        Ok(())
    }

    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::ModelNotFound(dir.to_path_buf()));
        }
        let raw = fs::read(dir.join(MODEL_FILE)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ModelNotFound(dir.to_path_buf()),
            _ => Error::Io(e),
        })?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

impl TextModel for NgramModel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R, temperature: f64) -> String {
        let mut state: Vec<&str> = vec![START; self.order];
        let mut out: Vec<&str> = Vec::new();

        for _ in 0..MAX_NEW_TOKENS {
            let Some(nexts) = self.transitions.get(&state.join(" ")) else {
                break;
            };
            let Some(word) = pick(nexts, temperature, rng) else {
                break;
            };
            if word == END {
                break;
            }
            out.push(word);
            state.remove(0);
            state.push(word);
        }
        out.join(" ")
    }
}

/// Weighted choice with weights `count^(1/temperature)`; greedy when
/// `temperature <= 0`.
fn pick<'a, R: Rng + ?Sized>(
    nexts: &'a BTreeMap<String, u32>,
    temperature: f64,
    rng: &mut R,
) -> Option<&'a str> {
    if temperature <= 0.0 {
        return greedy(nexts);
    }

    // Scaled by the top count so every weight lies in (0, 1] and the most
    // frequent word keeps weight 1 however small the temperature.
    let top = f64::from(nexts.values().copied().max()?);
    let weights: Vec<f64> = nexts
        .values()
        .map(|&c| (f64::from(c) / top).powf(1.0 / temperature))
        .collect();
    let total: f64 = weights.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return greedy(nexts);
    }

    let mut r = rng.random::<f64>() * total;
    for ((word, _), w) in nexts.iter().zip(&weights) {
        if r < *w {
            return Some(word.as_str());
        }
        r -= w;
    }
    nexts.keys().next_back().map(String::as_str)
}

fn greedy(nexts: &BTreeMap<String, u32>) -> Option<&str> {
    // max_by_key keeps the last maximum; reverse so ties go to the first word
    nexts
        .iter()
        .rev()
        .max_by_key(|(_, c)| **c)
        .map(|(w, _)| w.as_str())
}
