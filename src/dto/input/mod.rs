mod json_body;
mod rating;
mod ticket;
mod ticket_message;

pub use json_body::*;
pub use rating::*;
pub use ticket::*;
pub use ticket_message::*;
