#[derive(Debug, Clone, PartialEq)]
pub struct Mail {
    /// Display name put in front of the configured sender address
    pub sender_name: &'static str,
    pub to: String,
    pub subject: String,
    pub html: String,
}
