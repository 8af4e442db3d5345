use super::{Rating, RatingsRepository};
use axum::async_trait;
use tokio::sync::Mutex;

pub struct RatingsRepositoryImpl {
    ratings: Mutex<Vec<Rating>>,
}

impl RatingsRepositoryImpl {
    pub fn new() -> Self {
        Self {
            ratings: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RatingsRepository for RatingsRepositoryImpl {
    async fn insert(&self, rating: Rating) {
        let mut ratings = self.ratings.lock().await;
        ratings.push(rating);
        tracing::debug!(total = ratings.len(), "inserted rating");
    }

    async fn find_all(&self) -> Vec<Rating> {
        self.ratings.lock().await.clone()
    }
}
