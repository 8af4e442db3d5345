use crate::repository::Ticket;

#[derive(Debug, Clone)]
pub struct CreatedTicket {
    pub ticket: Ticket,
    /// Dashboard link sent to the operator
    pub owner_link: String,
}
