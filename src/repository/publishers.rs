//! Publishers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::publisher::Publisher};

#[derive(Clone)]
pub struct PublishersRepository {
    pool: Pool<Postgres>,
}

impl PublishersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all publishers
    pub async fn list(&self) -> AppResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT id, name, address, phone, email FROM publisher ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(publishers)
    }
}
