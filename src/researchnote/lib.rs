//! # researchnote
//!
//! A research notebook kept as a directory of dated plain-text notes, one
//! file per note:
//!
//! ```text
//! ~/PhD/Notebook/
//! ├── 2012-10-28_Problem_with_SDSS_J14060119.rst
//! └── 2012-10-30_Fitting_SDSS_spectra.rst
//! ```
//!
//! Each note starts with its title, an underline and a small field list:
//!
//! ```text
//! Fitting SDSS spectra
//! ====================
//!
//! :date: 2012-10-30
//! :author: Loïc Séguin-Charbonneau
//! :tags: SDSS, fit
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints output, launches the editor     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (identifier words → NoteSelector)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, list, paths, config                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`store`]: Note naming, allocation and directory scanning
//! - [`model`]: Note types, metadata reader and note template
//! - [`index`]: Display numbers and identifier resolution
//! - [`slug`]: Title to file name conversion
//! - [`config`]: INI configuration
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod slug;
pub mod store;
