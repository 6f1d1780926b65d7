// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod game;
pub mod model;
pub mod noise;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod store;
pub mod wisdom;

pub use data::Proverb;
pub use error::{Error, Result};
