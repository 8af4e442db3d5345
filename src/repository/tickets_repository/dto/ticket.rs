use strum::{AsRefStr, EnumString};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Java,
    Bedrock,
}

impl Platform {
    ///
    /// Bedrock players are prefixed with '.' on the server
    ///
    pub fn display_username(&self, username: &str) -> String {
        match self {
            Platform::Java => username.to_string(),
            Platform::Bedrock => format!(".{username}"),
        }
    }

    pub fn edition(&self) -> &'static str {
        match self {
            Platform::Java => "Java Edition",
            Platform::Bedrock => "Bedrock Edition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MessageSender {
    Operator,
}

#[derive(Debug, Clone)]
pub struct TicketMessage {
    pub sender: MessageSender,
    pub text: String,
    pub sent_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: Uuid,

    pub username: String,
    pub platform: Platform,
    pub area_size: String,
    pub email: String,

    pub status: TicketStatus,
    pub created_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,

    pub messages: Vec<TicketMessage>,
}
