//! Interactive modules
//!
//! - integrations: the Smarter Integration board and its per-card state
//! - export: report summary export to JSON and CSV

pub mod export;
pub mod integrations;
