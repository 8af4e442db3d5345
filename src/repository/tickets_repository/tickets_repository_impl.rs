use super::{MessageSender, Ticket, TicketInsert, TicketMessage, TicketStatus, TicketsRepository};
use crate::repository::{self, Error};
use axum::async_trait;
use std::collections::{hash_map::Entry, HashMap};
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

pub struct TicketsRepositoryImpl {
    tickets: Mutex<HashMap<Uuid, Ticket>>,
}

impl TicketsRepositoryImpl {
    pub fn new() -> Self {
        let tickets = HashMap::new();
        let tickets = Mutex::new(tickets);

        Self { tickets }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: TicketInsert) -> Result<Ticket, repository::Error> {
        let id = Uuid::new_v4();
        let ticket = Ticket {
            id,
            username: ticket.username,
            platform: ticket.platform,
            area_size: ticket.area_size,
            email: ticket.email,
            status: TicketStatus::Open,
            created_at: ticket.created_at,
            completed_at: None,
            messages: Vec::new(),
        };

        let mut tickets = self.tickets.lock().await;
        match tickets.entry(id) {
            Entry::Occupied(_) => Err(Error::InsertUniqueViolation),
            Entry::Vacant(entry) => {
                tracing::debug!(%id, "inserted ticket");
                Ok(entry.insert(ticket).clone())
            }
        }
    }

    async fn find(&self, id: Uuid) -> Option<Ticket> {
        self.tickets.lock().await.get(&id).cloned()
    }

    async fn push_message(
        &self,
        id: Uuid,
        text: String,
        sent_at: OffsetDateTime,
    ) -> Result<(), repository::Error> {
        let mut tickets = self.tickets.lock().await;
        let ticket = tickets.get_mut(&id).ok_or(Error::NoTicketUpdated)?;

        if ticket.status == TicketStatus::Complete {
            return Err(Error::TicketComplete);
        }

        ticket.messages.push(TicketMessage {
            sender: MessageSender::Operator,
            text,
            sent_at,
        });
        tracing::debug!(%id, messages = ticket.messages.len(), "pushed message");

        Ok(())
    }

    async fn update_completed_at(
        &self,
        id: Uuid,
        completed_at: OffsetDateTime,
    ) -> Result<Ticket, repository::Error> {
        let mut tickets = self.tickets.lock().await;
        let ticket = tickets.get_mut(&id).ok_or(Error::NoTicketUpdated)?;

        ticket.status = TicketStatus::Complete;
        ticket.completed_at = Some(completed_at);

        Ok(ticket.clone())
    }

    async fn count(&self) -> usize {
        self.tickets.lock().await.len()
    }
}
