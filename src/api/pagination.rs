use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use crate::api::errors::ApiError;
use crate::core::config::PaginationSettings;
use crate::pagination::{
    resolve_order_by, OrderDirection, PaginationError, PaginationRequest, DEFAULT_PAGE,
};

/// Listing parameters exactly as they arrived in the query string.
///
/// `page`, `per_page` and `order_dir` keep their first occurrence;
/// `order_by` may repeat and keeps every value in order.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct PaginationQuery {
    page: Option<String>,
    per_page: Option<String>,
    order_by: Vec<String>,
    order_dir: Option<String>,
}

impl PaginationQuery {
    pub(crate) fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "page" => {
                    query.page.get_or_insert(value);
                }
                "per_page" => {
                    query.per_page.get_or_insert(value);
                }
                "order_dir" => {
                    query.order_dir.get_or_insert(value);
                }
                "order_by" => query.order_by.push(value),
                _ => {}
            }
        }
        query
    }

    /// Coerces page numbers to usable values and checks ordering against `sortable`.
    ///
    /// Missing, unparsable or non-positive `page`/`per_page` fall back to the
    /// defaults and `per_page` is capped at the configured maximum. Ordering
    /// is never coerced: unknown columns or directions are rejected.
    pub(crate) fn into_request(
        self,
        settings: &PaginationSettings,
        sortable: &'static [&'static str],
    ) -> Result<PaginationRequest, PaginationError> {
        let page = positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let per_page = positive(self.per_page.as_deref())
            .unwrap_or(settings.default_per_page)
            .min(settings.max_per_page);

        let order_by = resolve_order_by(&self.order_by, sortable)?;
        let order_dir = OrderDirection::parse(self.order_dir.as_deref())?;

        Ok(PaginationRequest::new(page, per_page).with_order(order_by, order_dir))
    }
}

fn positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok()).filter(|value| *value > 0)
}

#[async_trait]
impl<S> FromRequestParts<S> for PaginationQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        Ok(Self::from_pairs(pairs))
    }
}
