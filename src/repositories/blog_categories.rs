use sqlx::PgPool;

use crate::db::models::BlogCategory;
use crate::pagination::{self, PaginationError, PaginationRequest, PaginationResponse, Statement};

pub(crate) const TABLE: &str = "blog_categories";

pub(crate) const SORTABLE_COLUMNS: &[&str] = &["id", "title", "created_at", "updated_at"];

pub(crate) async fn list(
    pool: &PgPool,
    request: &PaginationRequest,
) -> Result<PaginationResponse<BlogCategory>, PaginationError> {
    let fetch = Statement::select_all(TABLE)?;
    let count = Statement::count_all(TABLE)?;
    pagination::paginate(pool, fetch, count, request).await
}
