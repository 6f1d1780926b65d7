// src/game.rs
//! "Sumerian or Synthetic?": show a proverb, the player guesses whether it
//! came from the archive or from the model.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::data::Proverb;
use crate::error::{Error, Result};
use crate::store::random_proverb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Sumerian,
    Synthetic,
}

impl Origin {
    fn label(self) -> &'static str {
        match self {
            Origin::Sumerian => "SUMERIAN",
            Origin::Synthetic => "SYNTHETIC",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub origin: Origin,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameScore {
    pub correct: u32,
    pub rounds: u32,
}

/// Coin-flip each round's origin.
pub fn plan_rounds<R: Rng + ?Sized>(rng: &mut R, rounds: u32) -> Vec<Origin> {
    (0..rounds)
        .map(|_| if rng.random_bool(0.5) { Origin::Sumerian } else { Origin::Synthetic })
        .collect()
}

/// Fill the plan with texts before play starts, so generation never stalls
/// a round. Synthetic texts are produced first, in round order.
pub fn deal_rounds<R, F>(
    plan: &[Origin],
    archive: &[Proverb],
    rng: &mut R,
    mut synthesize: F,
) -> Result<Vec<Round>>
where
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> String,
{
    let n_synthetic = plan.iter().filter(|o| **o == Origin::Synthetic).count();
    let mut synthetic: Vec<String> = (0..n_synthetic).map(|_| synthesize(rng)).collect();
    synthetic.reverse();

    plan.iter()
        .map(|&origin| {
            let text = match origin {
                Origin::Sumerian => random_proverb(archive, rng)?.text.clone(),
                Origin::Synthetic => synthetic.pop().unwrap_or_default(),
            };
            Ok(Round { origin, text })
        })
        .collect()
}

/// Run the rounds against `input`/`out`. Each guess is re-asked until it is
/// `1` (Sumerian) or `2` (Synthetic).
pub fn play<I: BufRead, W: Write>(rounds: &[Round], mut input: I, mut out: W) -> Result<GameScore> {
    let total = rounds.len() as u32;
    let mut correct = 0;

    for (r, round) in (1..).zip(rounds) {
        writeln!(out, "--- Round {r}/{total} ---")?;
        writeln!(out, "\"{}\"", round.text)?;

        let guess = loop {
            write!(out, "Sumerian (1) or Synthetic (2)? ")?;
            out.flush()?;
            let mut line = s!();
            if input.read_line(&mut line)? == 0 {
                return Err(Error::InputClosed);
            }
            match line.trim() {
                "1" => break Origin::Sumerian,
                "2" => break Origin::Synthetic,
                _ => writeln!(out, "Type 1 or 2.")?,
            }
        };

        if guess == round.origin {
            correct += 1;
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Wrong!")?;
        }
        writeln!(out, "It was {}", round.origin.label())?;
        writeln!(out)?;
    }

    writeln!(out, "Score: {correct}/{total}")?;
    Ok(GameScore { correct, rounds: total })
}
