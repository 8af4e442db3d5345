use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Rating {
    /// Already masked
    pub username: String,
    pub rating: u8,
    pub review: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl From<repository::Rating> for Rating {
    fn from(value: repository::Rating) -> Self {
        Self {
            username: value.masked_username,
            rating: value.rating,
            review: value.review,
            at: value.at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingsSummary {
    pub ratings: Vec<Rating>,
    pub average: f64,
    pub total: usize,
}
