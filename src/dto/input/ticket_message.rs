use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TicketMessage {
    pub message: Option<String>,
}
