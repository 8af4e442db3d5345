use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingsService: Send + Sync {
    ///
    /// Masks username and stores the rating.
    ///
    /// ### Errors
    /// - [Error::Validation] when
    ///     - username or rating is missing
    ///     - rating is not between 1 and 5
    ///
    async fn submit_rating(&self, rating: input::Rating) -> Result<(), Error>;

    ///
    /// ### Returns
    /// All ratings with their average rounded to one decimal place,
    /// average is 0 when there are no ratings
    ///
    async fn ratings_summary(&self) -> output::RatingsSummary;
}
