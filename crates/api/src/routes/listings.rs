//! Route definitions for the XMLTV listing.

use axum::routing::get;
use axum::Router;

use crate::handlers::listings;
use crate::state::AppState;

/// Listing routes mounted at the root.
///
/// ```text
/// GET /?daysAhead=<0..7>  -> get_listing
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(listings::get_listing))
}
