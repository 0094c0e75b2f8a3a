//! The fixed menu of canned catalogue lookups

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowRecord, Loan, Member, Publisher},
    repository::Repository,
};

/// The canned lookups a client can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    BooksByAuthor,
    AllPublishers,
    AllMembers,
    MembersByBook,
    MembersWithLoans,
}

impl QueryKind {
    pub const ALL: [QueryKind; 5] = [
        QueryKind::BooksByAuthor,
        QueryKind::AllPublishers,
        QueryKind::AllMembers,
        QueryKind::MembersByBook,
        QueryKind::MembersWithLoans,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            QueryKind::BooksByAuthor => "Find all books by a specific author",
            QueryKind::AllPublishers => "List all publishers",
            QueryKind::AllMembers => "List all members",
            QueryKind::MembersByBook => "List all members who borrowed a particular book",
            QueryKind::MembersWithLoans => "List all members who borrowed at least one book",
        }
    }
}

/// Query execution request
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    pub query: QueryKind,
    /// Author name, required by `books_by_author`
    pub author: Option<String>,
    /// Book title, required by `members_by_book`
    pub title: Option<String>,
}

/// Query results, one variant per row shape
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum QueryResult {
    Books(Vec<Book>),
    Publishers(Vec<Publisher>),
    Members(Vec<Member>),
    BorrowRecords(Vec<BorrowRecord>),
}

#[derive(Clone)]
pub struct QueriesService {
    repository: Repository,
}

impl QueriesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Execute one of the canned lookups
    pub async fn run(&self, request: QueryRequest) -> AppResult<QueryResult> {
        match request.query {
            QueryKind::BooksByAuthor => {
                let author = required_input(request.author, "author")?;
                let books = self.repository.books.list_by_author(&author).await?;
                Ok(QueryResult::Books(books))
            }
            QueryKind::AllPublishers => {
                let publishers = self.repository.publishers.list().await?;
                Ok(QueryResult::Publishers(publishers))
            }
            QueryKind::AllMembers => {
                let members = self.repository.members.list().await?;
                Ok(QueryResult::Members(members))
            }
            QueryKind::MembersByBook => {
                let title = required_input(request.title, "title")?;
                let records = self.members_by_book(&title).await?;
                Ok(QueryResult::BorrowRecords(records))
            }
            QueryKind::MembersWithLoans => {
                let members = self.repository.members.list_with_loans().await?;
                Ok(QueryResult::Members(members))
            }
        }
    }

    /// Borrow history for a book title. A title matching no book
    /// short-circuits to an empty result before the join runs.
    pub async fn members_by_book(&self, title: &str) -> AppResult<Vec<BorrowRecord>> {
        if self.repository.books.get_by_title(title).await?.is_none() {
            tracing::warn!("No book found with title '{}'", title);
            return Ok(Vec::new());
        }

        self.repository.loans.for_book_title(title).await
    }

    /// All loan records
    pub async fn loans(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }
}

fn required_input(value: Option<String>, field: &str) -> AppResult<String> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest(format!(
            "'{}' is required for this query",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_are_distinct_and_non_empty() {
        let mut seen = Vec::new();
        for kind in QueryKind::ALL {
            let description = kind.description();
            assert!(!description.is_empty());
            assert!(!seen.contains(&description));
            seen.push(description);
        }
    }

    #[test]
    fn kind_names_use_snake_case_tags() {
        let parsed: QueryKind = serde_json::from_str("\"members_by_book\"").unwrap();
        assert_eq!(parsed, QueryKind::MembersByBook);
    }

    #[test]
    fn required_input_trims_and_rejects_blank() {
        assert_eq!(
            required_input(Some("  Dune  ".to_string()), "title").unwrap(),
            "Dune"
        );
        assert!(required_input(Some("   ".to_string()), "title").is_err());
        assert!(required_input(None, "title").is_err());
    }
}
