// src/scrape/mod.rs
mod archive;
pub use archive::build_archive;
