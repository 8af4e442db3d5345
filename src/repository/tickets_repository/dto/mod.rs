mod ticket;
mod ticket_insert;

pub use ticket::*;
pub use ticket_insert::*;
