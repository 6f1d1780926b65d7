// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://etcsl.orinst.ox.ac.uk/proverbs/";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const FIRST_PAGE: u32 = 1;
pub const LAST_PAGE: u32 = 28; // 6.1.28
pub const REQUEST_PAUSE_MS: u64 = 200; // be polite

// Archive
pub const ENV_KEY: &str = "PROVERB_ARCHIVE_KEY";
pub const DEFAULT_ARCHIVE: &str = "ancient_wisdoms.json";

// Model
pub const DEFAULT_MODEL_DIR: &str = "proverb_model";
pub const MODEL_FILE: &str = "model.json";
pub const DEFAULT_ORDER: usize = 2;
pub const DEFAULT_TEMPERATURE: f64 = 0.9;
pub const MAX_RETRIES: usize = 15;
pub const MAX_NEW_TOKENS: usize = 80;

// Game
pub const DEFAULT_ROUNDS: u32 = 20;
