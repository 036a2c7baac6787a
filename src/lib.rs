// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod charts;
pub mod export;
pub mod file;
pub mod filter;
pub mod progress;
pub mod season;
pub mod table;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
