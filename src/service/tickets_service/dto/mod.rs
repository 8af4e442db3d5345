mod created_ticket;
mod tickets_service_config;

pub use created_ticket::*;
pub use tickets_service_config::*;
