use super::Rating;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingsRepository: Send + Sync {
    async fn insert(&self, rating: Rating);

    ///
    /// ### Returns
    /// All ratings in insertion order
    ///
    async fn find_all(&self) -> Vec<Rating>;
}
