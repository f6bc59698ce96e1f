use std::time::Instant;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres};

use super::error::PaginationError;
use super::request::PaginationRequest;
use super::response::PaginationResponse;
use super::statement::Statement;

/// A tabular data source able to run a row count and a row fetch independently.
///
/// Implementations must tolerate both calls running at the same time.
#[async_trait]
pub(crate) trait RowSource: Send + Sync {
    type Row: Send;

    async fn count(&self, statement: Statement) -> Result<i64, sqlx::Error>;

    async fn fetch(&self, statement: Statement) -> Result<Vec<Self::Row>, sqlx::Error>;
}

#[async_trait]
impl RowSource for PgPool {
    type Row = PgRow;

    async fn count(&self, statement: Statement) -> Result<i64, sqlx::Error> {
        let (sql, args) = statement.into_parts();
        sqlx::query_scalar_with::<Postgres, i64, _>(&sql, args).fetch_one(self).await
    }

    async fn fetch(&self, statement: Statement) -> Result<Vec<PgRow>, sqlx::Error> {
        let (sql, args) = statement.into_parts();
        sqlx::query_with::<Postgres, _>(&sql, args).fetch_all(self).await
    }
}

/// Builds an item from one row of a source.
pub(crate) trait DecodeRow<R>: Sized {
    fn decode_row(row: &R) -> Result<Self, sqlx::Error>;
}

impl<T> DecodeRow<PgRow> for T
where
    T: for<'r> FromRow<'r, PgRow>,
{
    fn decode_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        T::from_row(row)
    }
}

/// Fetches one page of `T` together with the total row count.
///
/// `fetch` is decorated with the request's ordering and slicing; `count` runs
/// as given. Both run concurrently and the first failure aborts the call.
pub(crate) async fn paginate<S, T>(
    source: &S,
    fetch: Statement,
    count: Statement,
    request: &PaginationRequest,
) -> Result<PaginationResponse<T>, PaginationError>
where
    S: RowSource + ?Sized,
    T: DecodeRow<S::Row>,
{
    let started = Instant::now();
    let result = fetch_page(source, fetch, count, request).await;

    metrics::histogram!("pagination_query_duration_seconds")
        .record(started.elapsed().as_secs_f64());
    if let Err(err) = &result {
        metrics::counter!("pagination_failures_total", "kind" => err.kind()).increment(1);
        tracing::debug!(error = %err, kind = err.kind(), "pagination failed");
    }

    result
}

async fn fetch_page<S, T>(
    source: &S,
    fetch: Statement,
    count: Statement,
    request: &PaginationRequest,
) -> Result<PaginationResponse<T>, PaginationError>
where
    S: RowSource + ?Sized,
    T: DecodeRow<S::Row>,
{
    request.check()?;

    let fetch = fetch.decorated(request);
    tracing::debug!(
        fetch_sql = %fetch.sql(),
        count_sql = %count.sql(),
        page = request.page(),
        per_page = request.per_page(),
        "running paginated query"
    );

    let (total_items, mut rows) = tokio::try_join!(
        async move { source.count(count).await.map_err(PaginationError::DataSource) },
        async move { source.fetch(fetch).await.map_err(PaginationError::DataSource) },
    )?;

    rows.truncate(usize::try_from(request.per_page()).unwrap_or(usize::MAX));

    let items = rows
        .iter()
        .map(<T as DecodeRow<S::Row>>::decode_row)
        .collect::<Result<Vec<_>, _>>()
        .map_err(PaginationError::Mapping)?;

    Ok(PaginationResponse::new(request, items, total_items))
}
