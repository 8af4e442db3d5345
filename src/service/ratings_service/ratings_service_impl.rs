use super::{mask_username, RatingsService};
use crate::{
    dto::{input, output},
    error::Error,
    repository::{Rating, RatingsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::OffsetDateTime;

const MIN_RATING: i64 = 1;
const MAX_RATING: i64 = 5;

pub struct RatingsServiceImpl {
    repository: Arc<dyn RatingsRepository>,
}

impl RatingsServiceImpl {
    pub fn new(repository: Arc<dyn RatingsRepository>) -> Self {
        Self { repository }
    }

    fn validate_rating(rating: i64) -> Result<u8, Error> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(Error::Validation("rating must be between 1 and 5"));
        }

        Ok(rating as u8)
    }

    fn average(ratings: &[Rating]) -> f64 {
        if ratings.is_empty() {
            return 0.0;
        }

        let sum = ratings
            .iter()
            .map(|rating| rating.rating as u64)
            .sum::<u64>();
        let average = sum as f64 / ratings.len() as f64;

        (average * 10.0).round() / 10.0
    }
}

#[async_trait]
impl RatingsService for RatingsServiceImpl {
    async fn submit_rating(&self, rating: input::Rating) -> Result<(), Error> {
        tracing::info!("submitting rating");

        let input::Rating {
            username,
            rating,
            review,
        } = rating;

        // 0 counts as missing
        let (Some(username), Some(rating)) = (
            username.filter(|username| !username.is_empty()),
            rating.filter(|rating| *rating != 0),
        ) else {
            return Err(Error::Validation("missing fields"));
        };
        let rating = Self::validate_rating(rating)?;

        let rating = Rating {
            masked_username: mask_username(&username),
            rating,
            review: review.unwrap_or_default(),
            at: OffsetDateTime::now_utc(),
        };
        self.repository.insert(rating).await;

        tracing::info!("submitted rating");

        Ok(())
    }

    async fn ratings_summary(&self) -> output::RatingsSummary {
        let ratings = self.repository.find_all().await;

        let average = Self::average(&ratings);
        let total = ratings.len();
        let ratings = ratings.into_iter().map(output::Rating::from).collect();

        output::RatingsSummary {
            ratings,
            average,
            total,
        }
    }
}
