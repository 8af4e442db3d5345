use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub masked_username: String,
    /// Always between 1 and 5
    pub rating: u8,
    pub review: String,
    pub at: OffsetDateTime,
}
