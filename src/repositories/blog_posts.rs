use sqlx::PgPool;

use crate::db::models::BlogPost;
use crate::pagination::{self, PaginationError, PaginationRequest, PaginationResponse, Statement};

pub(crate) const TABLE: &str = "blog_posts";

/// Columns a caller may order posts by.
pub(crate) const SORTABLE_COLUMNS: &[&str] = &["id", "title", "body", "created_at", "updated_at"];

pub(crate) async fn list(
    pool: &PgPool,
    request: &PaginationRequest,
) -> Result<PaginationResponse<BlogPost>, PaginationError> {
    let fetch = Statement::select_all(TABLE)?;
    let count = Statement::count_all(TABLE)?;
    pagination::paginate(pool, fetch, count, request).await
}
