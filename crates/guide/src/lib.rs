//! Client for the NPO guide API.

pub mod api;

pub use api::{GuideApi, GuideApiError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, GUIDE_CHANNEL_PATH};
