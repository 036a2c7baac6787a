// src/season/mod.rs
//
// One season = fetch the per-game page once, normalize it, keep it for the
// life of the process.

mod cache;
mod normalize;

pub use cache::{SeasonCache, SeasonSource, WebSource};
pub use normalize::normalize;
