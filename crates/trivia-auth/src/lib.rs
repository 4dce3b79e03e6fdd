//! # trivia-auth
//!
//! Permission guarding for mutating Trivia commands.
//!
//! A caller presents an `Authorization: Bearer <jwt>` value. The payload
//! segment is decoded (the signature is not verified here) and its
//! `permissions` claim is checked for the scope the command needs.

pub mod claims;
pub mod error;
pub mod header;
pub mod permissions;

pub use claims::{TriviaClaims, decode_claims};
pub use error::AuthError;
pub use header::bearer_token;
pub use permissions::{DELETE_QUESTIONS, POST_QUESTIONS, check_permission, requires_auth};
