pub mod mail_service;
pub mod ratings_service;
pub mod tickets_service;
