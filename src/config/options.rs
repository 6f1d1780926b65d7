// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Archive builder settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    /// Keep entries that are only catalogue notes ("1 line unclear").
    pub include_editorial_noise: bool,
    pub first_page: u32,
    pub last_page: u32,
    pub pause: Duration,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_editorial_noise: false,
            first_page: FIRST_PAGE,
            last_page: LAST_PAGE,
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl BuildOptions {
    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.first_page..=self.last_page
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerateOptions {
    pub model_dir: PathBuf,
    pub temperature: f64,
    pub max_retries: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            temperature: DEFAULT_TEMPERATURE,
            max_retries: MAX_RETRIES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameOptions {
    pub archive: PathBuf,
    pub generate: GenerateOptions,
    pub rounds: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            archive: PathBuf::from(DEFAULT_ARCHIVE),
            generate: GenerateOptions::default(),
            rounds: DEFAULT_ROUNDS,
        }
    }
}
