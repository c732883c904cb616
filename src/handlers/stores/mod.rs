// handlers/stores - Store CRUD and search
//
// Public:    GET /stores/page/:page, GET /stores/:id, POST /stores/search
// Protected: POST /stores, PUT /stores, DELETE /stores/:id (bearer token)

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod search;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use detail::detail;
pub use list::list;
pub use search::{search, SearchRequest};
pub use update::update;

use std::str::FromStr;

use crate::error::ApiError;

/// Parse a path segment, mapping failure to a 400 with `message`
pub(crate) fn parse_path<T: FromStr>(raw: &str, message: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        tracing::debug!("Unparseable path parameter '{}'", raw);
        ApiError::bad_request(message)
    })
}
