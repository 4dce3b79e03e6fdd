//! Repository modules implementing queries for all Trivia entities.
//!
//! Each module adds methods to `TriviaService` via `impl TriviaService` blocks.

pub mod category;
pub mod question;
pub mod quiz;
pub mod seed;
