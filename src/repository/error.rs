#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("no ticket updated")]
    NoTicketUpdated,

    #[error("ticket already complete")]
    TicketComplete,
}
