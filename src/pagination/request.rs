use validator::Validate;

use super::error::PaginationError;

pub(crate) const DEFAULT_PAGE: i64 = 1;
pub(crate) const DEFAULT_PER_PAGE: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OrderDirection {
    Asc,
    #[default]
    Desc,
}

impl OrderDirection {
    /// Parses a raw `order_dir` token. Absent or blank input means the default (descending).
    pub(crate) fn parse(raw: Option<&str>) -> Result<Self, PaginationError> {
        let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };

        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(OrderDirection::Asc),
            "desc" => Ok(OrderDirection::Desc),
            _ => Err(PaginationError::InvalidRequest(format!(
                "unsupported order direction '{value}'"
            ))),
        }
    }

    pub(crate) fn as_sql(self) -> &'static str {
        match self {
            OrderDirection::Asc => "ASC",
            OrderDirection::Desc => "DESC",
        }
    }
}

/// Page selection and ordering for one listing call.
///
/// Ordering columns are always the `'static` names of a resource whitelist
/// (see [`resolve_order_by`]), so they can be written into SQL verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub(crate) struct PaginationRequest {
    #[validate(range(min = 1, message = "page must be positive"))]
    page: i64,
    #[validate(range(min = 1, message = "per_page must be positive"))]
    per_page: i64,
    order_by: Vec<&'static str>,
    order_dir: OrderDirection,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PER_PAGE)
    }
}

impl PaginationRequest {
    pub(crate) fn new(page: i64, per_page: i64) -> Self {
        Self { page, per_page, order_by: Vec::new(), order_dir: OrderDirection::default() }
    }

    pub(crate) fn with_order(
        mut self,
        order_by: Vec<&'static str>,
        order_dir: OrderDirection,
    ) -> Self {
        self.order_by = order_by;
        self.order_dir = order_dir;
        self
    }

    pub(crate) fn page(&self) -> i64 {
        self.page
    }

    pub(crate) fn per_page(&self) -> i64 {
        self.per_page
    }

    pub(crate) fn order_by(&self) -> &[&'static str] {
        &self.order_by
    }

    pub(crate) fn order_dir(&self) -> OrderDirection {
        self.order_dir
    }

    /// Number of rows skipped before this page. Saturates; [`Self::check`] rejects overflow.
    pub(crate) fn offset(&self) -> i64 {
        self.per_page.saturating_mul(self.page.saturating_sub(1))
    }

    /// Rejects requests the paginator cannot serve: non-positive page or
    /// page size, or an offset that does not fit in a BIGINT.
    pub(crate) fn check(&self) -> Result<(), PaginationError> {
        self.validate().map_err(|err| PaginationError::InvalidRequest(err.to_string()))?;

        self.per_page.checked_mul(self.page - 1).ok_or_else(|| {
            PaginationError::InvalidRequest(format!(
                "page {} is out of range for per_page {}",
                self.page, self.per_page
            ))
        })?;

        Ok(())
    }
}

/// Maps raw `order_by` values onto the allowed column set, keeping their order.
pub(crate) fn resolve_order_by(
    raw: &[String],
    allowed: &'static [&'static str],
) -> Result<Vec<&'static str>, PaginationError> {
    raw.iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            allowed.iter().copied().find(|column| *column == value).ok_or_else(|| {
                PaginationError::InvalidRequest(format!("cannot order by '{value}'"))
            })
        })
        .collect()
}
