pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod input;
pub mod modules;
pub mod ui;
