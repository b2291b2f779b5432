use std::sync::Arc;

use npo2xml_core::channel::ChannelCatalog;
use npo2xml_guide::GuideApi;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Channels to list, loaded once at startup.
    pub catalog: Arc<ChannelCatalog>,
    /// Guide API client (shares one connection pool).
    pub guide: GuideApi,
}
