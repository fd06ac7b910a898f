//! CarFinder search front-end library.
//!
//! Re-exports all modules so the binary (`main.rs`) and external crates
//! (e.g. `cf-e2e-tests`) can reach `SearchController`, the config loader
//! and the command runner.

pub mod command;
pub mod config;
pub mod controller;
pub mod inventory;

pub use controller::{SearchController, SearchMode, SearchResult, Submission};
