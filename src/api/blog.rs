use axum::{extract::State, routing::get, Json, Router};

use crate::api::errors::ApiError;
use crate::api::pagination::PaginationQuery;
use crate::core::state::AppState;
use crate::pagination::PaginationResponse;
use crate::repositories::{blog_categories, blog_posts};
use crate::schemas::blog::{BlogCategoryResponse, BlogPostResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/categories", get(list_categories))
}

async fn list_posts(
    State(state): State<AppState>,
    query: PaginationQuery,
) -> Result<Json<PaginationResponse<BlogPostResponse>>, ApiError> {
    let request = query
        .into_request(state.settings().pagination(), blog_posts::SORTABLE_COLUMNS)
        .map_err(|e| ApiError::pagination(e, "Invalid blog post listing request"))?;

    let page = blog_posts::list(state.db(), &request)
        .await
        .map_err(|e| ApiError::pagination(e, "Failed to list blog posts"))?;

    Ok(Json(page.map_items(BlogPostResponse::from_db)))
}

async fn list_categories(
    State(state): State<AppState>,
    query: PaginationQuery,
) -> Result<Json<PaginationResponse<BlogCategoryResponse>>, ApiError> {
    let request = query
        .into_request(state.settings().pagination(), blog_categories::SORTABLE_COLUMNS)
        .map_err(|e| ApiError::pagination(e, "Invalid blog category listing request"))?;

    let page = blog_categories::list(state.db(), &request)
        .await
        .map_err(|e| ApiError::pagination(e, "Failed to list blog categories"))?;

    Ok(Json(page.map_items(BlogCategoryResponse::from_db)))
}
