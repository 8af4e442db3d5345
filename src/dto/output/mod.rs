mod error;
mod health;
mod rating;
mod success;

pub use error::*;
pub use health::*;
pub use rating::*;
pub use success::*;
