// Library surface for headless/integration tests and reuse.
// The binary in main.rs only adds argument parsing and terminal setup.
pub mod app;
pub mod app_dirs;
pub mod board;
pub mod config;
pub mod countdown;
pub mod elements;
pub mod error;
pub mod game;
pub mod hints;
pub mod logging;
pub mod notice;
pub mod runtime;
pub mod ui;
