use super::Platform;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct TicketInsert {
    /// Already transformed for the platform
    pub username: String,
    pub platform: Platform,
    pub area_size: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}
