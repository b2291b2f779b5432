//! Handler for the XMLTV listing.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use npo2xml_core::time::local_today;

use crate::error::AppResult;
use crate::listing::build_listing;
use crate::query::ListingParams;
use crate::state::AppState;

/// GET /?daysAhead=<0..7>
///
/// Render today's schedule plus `daysAhead` further days for every channel
/// in the catalog. The query is read as raw pairs so that a repeated
/// `daysAhead` uses its first value; a query string that cannot be decoded at
/// all is treated like an absent `daysAhead`.
pub async fn get_listing(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let days_ahead = query.map_or(0, |Query(pairs)| ListingParams::from_pairs(pairs).days_ahead());

    let body = build_listing(&state.catalog, &state.guide, local_today(), days_ahead).await?;

    Ok(([(CONTENT_TYPE, "application/xml")], body))
}
