use super::CreatedTicket;
use crate::{dto::input, error::Error, repository::Ticket};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Stores new ticket and notifies both the player and the operator.
    ///
    /// ### Returns
    /// [CreatedTicket] with the owner link
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - any field is missing or empty
    ///     - platform is neither java nor bedrock
    /// - [Error::Mail] when any notification could not be sent,
    ///   ticket stays stored
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<CreatedTicket, Error>;

    ///
    /// Finds ticket using token taken from the owner link
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when
    ///     - token can't be decoded
    ///     - ticket with decoded id does not exist
    ///
    async fn find_ticket(&self, token: &str) -> Result<Ticket, Error>;

    ///
    /// Appends operator message to the ticket and mails it to the player
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket does not exist
    /// - [Error::TicketAlreadyComplete] when ticket is complete
    /// - [Error::Validation] when message is missing or empty
    /// - [Error::Mail] when notification could not be sent,
    ///   message stays appended
    ///
    async fn send_message(&self, id: Uuid, message: input::TicketMessage) -> Result<(), Error>;

    ///
    /// Marks ticket as complete and asks the player for a review.
    /// Completing a complete ticket sends the review request again.
    ///
    /// ### Errors
    /// - [Error::TicketNotExist] when ticket does not exist
    /// - [Error::Mail] when notification could not be sent,
    ///   ticket stays complete
    ///
    async fn complete_ticket(&self, id: Uuid) -> Result<(), Error>;

    async fn count_tickets(&self) -> usize;
}
