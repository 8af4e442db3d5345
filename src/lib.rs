pub mod application;
pub mod dto;
pub mod error;
pub mod repository;
pub mod routing;
pub mod service;
pub mod ticket_link;

mod dashboard;
