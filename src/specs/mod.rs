// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows one remote page: how its URL is built and where the table
//! we want lives in the HTML. Specs only fetch and extract.
//!
//! ## What does **not** live here
//! - **Cleaning** the extracted table (header bands, absent cells, rank column):
//!   that is `season::normalize`.
//! - **Caching**: `season::SeasonCache` decides when a page is fetched at all.
//! - **Filtering and export**: see `filter`, `export`, `file`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → SeasonCache::get_or_load(year)
//!               ↘ SeasonSource::fetch(year) → specs::per_game::fetch()
//!               ↘ season::normalize()
//! ```
//!
//! ## Testing notes
//! Specs are testable offline: `per_game::extract` takes the page text, so
//! fixtures can be fed in without the network.
pub mod per_game;
