pub struct TicketsServiceConfig {
    pub base_url: String,
    /// Recipient of new ticket alerts
    pub operator_email: String,
}
