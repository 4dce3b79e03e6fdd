//! Entity structs for the Trivia domain.
//!
//! Each entity maps to one table in the libSQL database. Entities are never
//! serialized directly onto the wire; see [`crate::responses`] for the
//! explicit views.

mod category;
mod question;

pub use category::Category;
pub use question::Question;
