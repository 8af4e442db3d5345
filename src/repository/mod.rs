//!
//! In-memory stores. Records live as long as the process does.
//!

mod error;
mod ratings_repository;
mod tickets_repository;

pub use error::*;
pub use ratings_repository::*;
pub use tickets_repository::*;
