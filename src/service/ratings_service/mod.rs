mod mask;
mod ratings_service;
mod ratings_service_impl;

pub use mask::*;
pub use ratings_service::*;
pub use ratings_service_impl::*;
