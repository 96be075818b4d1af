//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClipboardService, LinkListService, UrlService};
use crate::domain::repositories::StoreProbe;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    pub link_list_service: Arc<LinkListService>,
    pub clipboard_service: Arc<ClipboardService>,
    /// Connectivity check used by the health endpoint.
    pub store: Arc<dyn StoreProbe>,
}

impl AppState {
    pub fn new(
        url_service: Arc<UrlService>,
        link_list_service: Arc<LinkListService>,
        clipboard_service: Arc<ClipboardService>,
        store: Arc<dyn StoreProbe>,
    ) -> Self {
        Self {
            url_service,
            link_list_service,
            clipboard_service,
            store,
        }
    }
}
