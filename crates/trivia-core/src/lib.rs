//! # trivia-core
//!
//! Core types and request logic for the Trivia service.
//!
//! This crate is storage-agnostic and holds everything that operates on
//! already-fetched, in-memory data:
//! - Entity structs (`Question`, `Category`)
//! - Explicit wire views and response envelopes
//! - Page slicing for question listings
//! - Quiz question selection over a filtered pool
//! - Guard helpers that signal `NotFound` / `Unprocessable`
//! - Typed parsing of JSON request payloads

pub mod entities;
pub mod errors;
pub mod guards;
pub mod pagination;
pub mod payload;
pub mod quiz;
pub mod responses;
