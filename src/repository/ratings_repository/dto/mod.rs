mod rating;

pub use rating::*;
