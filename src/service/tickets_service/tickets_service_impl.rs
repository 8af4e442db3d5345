use super::{tickets_mails, CreatedTicket, TicketsService, TicketsServiceConfig};
use crate::{
    dto::input,
    error::Error,
    repository::{self, Platform, Ticket, TicketInsert, TicketStatus, TicketsRepository},
    service::mail_service::MailService,
    ticket_link,
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    config: TicketsServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    mail_service: Arc<dyn MailService>,
}

impl TicketsServiceImpl {
    pub fn new(
        config: TicketsServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        mail_service: Arc<dyn MailService>,
    ) -> Self {
        Self {
            config,
            repository,
            mail_service,
        }
    }

    fn validate_create_ticket(ticket: input::Ticket) -> Result<TicketInsert, Error> {
        let input::Ticket {
            username,
            platform,
            area_size,
            email,
        } = ticket;

        let (Some(username), Some(platform), Some(area_size), Some(email)) = (
            Self::non_empty(username),
            Self::non_empty(platform),
            Self::non_empty(area_size),
            Self::non_empty(email),
        ) else {
            return Err(Error::Validation("missing required fields"));
        };

        let platform = platform
            .parse::<Platform>()
            .map_err(|_| Error::Validation("platform must be java or bedrock"))?;

        Ok(TicketInsert {
            username: platform.display_username(&username),
            platform,
            area_size,
            email,
            created_at: OffsetDateTime::now_utc(),
        })
    }

    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|value| !value.is_empty())
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<CreatedTicket, Error> {
        tracing::info!("creating ticket");

        let ticket_insert = Self::validate_create_ticket(ticket)?;
        let ticket = self.repository.insert(ticket_insert).await?;
        tracing::info!(id = %ticket.id, "created ticket");

        let owner_link = ticket_link::owner_link(&self.config.base_url, ticket.id);

        self.mail_service
            .send(tickets_mails::submission_confirmation(&ticket))
            .await?;
        self.mail_service
            .send(tickets_mails::new_ticket_alert(
                &ticket,
                &owner_link,
                &self.config.operator_email,
            ))
            .await?;
        tracing::info!(id = %ticket.id, "sent ticket notifications");

        Ok(CreatedTicket { ticket, owner_link })
    }

    async fn find_ticket(&self, token: &str) -> Result<Ticket, Error> {
        tracing::info!("finding ticket");

        let id = ticket_link::decode_ticket_id(token).ok_or(Error::TicketNotExist)?;
        let ticket = self
            .repository
            .find(id)
            .await
            .ok_or(Error::TicketNotExist)?;

        tracing::info!(%id, "found ticket");

        Ok(ticket)
    }

    async fn send_message(&self, id: Uuid, message: input::TicketMessage) -> Result<(), Error> {
        tracing::info!(%id, "sending message");

        let ticket = self
            .repository
            .find(id)
            .await
            .ok_or(Error::TicketNotExist)?;

        if ticket.status == TicketStatus::Complete {
            return Err(Error::TicketAlreadyComplete);
        }

        let text = Self::non_empty(message.message)
            .ok_or(Error::Validation("message is required"))?;

        self.repository
            .push_message(id, text.clone(), OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::NoTicketUpdated => Error::TicketNotExist,
                repository::Error::TicketComplete => Error::TicketAlreadyComplete,
                err => Error::Storage(err),
            })?;
        tracing::info!(%id, "appended message");

        self.mail_service
            .send(tickets_mails::operator_message(&ticket, &text))
            .await?;
        tracing::info!(%id, "sent message");

        Ok(())
    }

    async fn complete_ticket(&self, id: Uuid) -> Result<(), Error> {
        tracing::info!(%id, "completing ticket");

        let ticket = self
            .repository
            .update_completed_at(id, OffsetDateTime::now_utc())
            .await
            .map_err(|err| match err {
                repository::Error::NoTicketUpdated => Error::TicketNotExist,
                err => Error::Storage(err),
            })?;
        tracing::info!(%id, "completed ticket");

        self.mail_service
            .send(tickets_mails::review_request(&ticket))
            .await?;
        tracing::info!(%id, "sent review request");

        Ok(())
    }

    async fn count_tickets(&self) -> usize {
        self.repository.count().await
    }
}
