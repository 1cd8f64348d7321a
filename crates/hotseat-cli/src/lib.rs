//! Hotseat chess at the terminal.
//!
//! Two players share one keyboard. This crate wraps the engine in a line
//! based front end.
//!
//! # Modules
//!
//! - [`config`] - `hotseat.toml` loading
//! - [`input`] - parsing typed moves and commands
//! - [`render`] - ASCII board drawing
//! - [`scoreboard`] - win counts kept in a JSON file
//! - [`app`] - the interactive loop tying it together

pub mod app;
pub mod config;
pub mod input;
pub mod render;
pub mod scoreboard;
