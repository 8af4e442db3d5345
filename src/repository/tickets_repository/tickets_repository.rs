use super::{Ticket, TicketInsert};
use crate::repository;
use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Allocates a new id and stores an open ticket without messages
    ///
    async fn insert(&self, ticket: TicketInsert) -> Result<Ticket, repository::Error>;

    async fn find(&self, id: Uuid) -> Option<Ticket>;

    ///
    /// ### Errors
    /// - [repository::Error::NoTicketUpdated] when ticket does not exist
    /// - [repository::Error::TicketComplete] when ticket is already complete
    ///
    async fn push_message(
        &self,
        id: Uuid,
        text: String,
        sent_at: OffsetDateTime,
    ) -> Result<(), repository::Error>;

    ///
    /// Marks ticket as complete. Already complete tickets get a new completion time.
    ///
    /// ### Returns
    /// Updated ticket
    ///
    /// ### Errors
    /// - [repository::Error::NoTicketUpdated] when ticket does not exist
    ///
    async fn update_completed_at(
        &self,
        id: Uuid,
        completed_at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error>;

    async fn count(&self) -> usize;
}
