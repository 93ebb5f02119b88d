//! # Glyph Codex
//!
//! A terminal client for browsing and searching a glyph codex service: a
//! backend catalogue of symbolic glyph records and thematic ideals.
//!
//! The client fetches the two collections once per session, filters them
//! locally, and reports interactions back to the backend as a fire-and-forget
//! audit stream.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌─────────────┐
//! │ CodexClient  │──▶│ LoadCoordinator│──▶│   Catalog    │
//! │ (reqwest)    │   │ Idle→Loading→  │   │ glyphs/ideals│
//! └──────┬───────┘   │ Ready/Failed   │   └──────┬──────┘
//!        │           └───────────────┘          │
//!        │                                      ▼
//!   ┌────┴─────┐                         ┌─────────────┐
//!   │ HttpSink │◀── interaction events ──│ CodexSession │
//!   │ (async)  │                         │ filter state │
//!   └──────────┘                         └──────┬──────┘
//!                                               ▼
//!                                          CLI commands
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`client`] | Backend API trait and reqwest implementation |
//! | [`loader`] | Startup load orchestration and state machine |
//! | [`session`] | Explicit session context and filter transitions |
//! | [`telemetry`] | Fire-and-forget interaction sinks |
//!
//! The pure filtering logic (models, filter engine, catalog, debounce
//! primitive) lives in the `glyph-codex-core` crate.

pub mod browse;
pub mod categories;
pub mod client;
pub mod config;
pub mod ideals;
pub mod loader;
pub mod search;
pub mod session;
pub mod stats;
pub mod telemetry;
