//! Members repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::member::Member};

const MEMBER_COLUMNS: &str =
    "id, first_name, last_name, email, phone, address, date_of_membership";

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "SELECT {} FROM member ORDER BY id",
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Members with at least one loan row, returned or not. Each member
    /// appears once regardless of how many loans they hold.
    pub async fn list_with_loans(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            r#"
            SELECT {} FROM member m
            WHERE EXISTS (SELECT 1 FROM loans l WHERE l.member_id = m.id)
            ORDER BY id
            "#,
            MEMBER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }
}
