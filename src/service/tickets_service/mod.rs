mod dto;
mod tickets_mails;
mod tickets_service;
mod tickets_service_impl;

pub use dto::{CreatedTicket, TicketsServiceConfig};
pub use tickets_service::*;
pub use tickets_service_impl::*;
