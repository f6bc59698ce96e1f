//! Offset pagination over a tabular source: request validation, statement
//! decoration, the concurrent count/fetch join and the page envelope.

mod composer;
mod error;
mod paginator;
mod request;
mod response;
mod statement;

pub(crate) use error::PaginationError;
pub(crate) use paginator::paginate;
pub(crate) use request::{resolve_order_by, OrderDirection, PaginationRequest, DEFAULT_PAGE};
pub(crate) use response::PaginationResponse;
pub(crate) use statement::Statement;
