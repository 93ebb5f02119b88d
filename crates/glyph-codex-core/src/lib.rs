//! # Glyph Codex Core
//!
//! Shared, dependency-light logic for glyph-codex: record models, the
//! search/filter engine, the session catalog, and the debounce primitive.
//!
//! This crate contains no tokio, reqwest, filesystem I/O, or other
//! native-only dependencies. Everything here is pure computation over
//! in-memory collections; the calling application owns networking,
//! timers, and presentation.

pub mod catalog;
pub mod debounce;
pub mod filter;
pub mod models;
