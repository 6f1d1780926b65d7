// src/specs/mod.rs
//! # Page readers
//!
//! One reader per kind of ETCSL page. A reader knows *where the ground truth
//! lives in the HTML* of that page and *how to turn it into records*.
//!
//! ## What lives here
//! - **Pure parsing** of already-fetched markup into `data::Proverb` records.
//! - **Site conventions**: the navigation boilerplate every page opens with,
//!   the editorial apparatus (`{...}` variants, `( cf. ... )` references),
//!   and the `N.` / `N-M.` line markers that start each proverb.
//! - **Light shaping**: segmentation, running numbering, noise filtering and
//!   scoring at ingestion.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **pacing** (`scrape::build_archive`).
//! - **Persistence / encryption** (`store`).
//!
//! ## Typical call chain
//! ```text
//! cli build → scrape::build_archive → Fetch::fetch(url)
//!                                   ↘ specs::proverbs::parse_proverb_page
//!             store::save_archive (outside of specs)
//! ```
//!
//! ## Testing notes
//! Readers are testable **offline** against captured pages (`tests/fixtures/`).
pub mod proverbs;
