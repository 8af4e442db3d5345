mod dto;
mod ratings_repository;
mod ratings_repository_impl;

pub use dto::*;
pub use ratings_repository::*;
pub use ratings_repository_impl::*;
