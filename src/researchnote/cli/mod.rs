//! # CLI Layer
//!
//! This module is **one possible UI client** for the notebook library.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Launches the external editor
//! - Handles argument parsing and logging setup
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `render.rs`: output formatting
//!
//! Errors bubble up to `main.rs`, which prints them and exits non-zero.
//! A missing editor is not an error: the note is left in place and a
//! message is printed to stderr.

mod commands;
mod render;
mod setup;

pub use commands::run;
