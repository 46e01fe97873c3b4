// Route exports
pub mod bio;
pub mod musicians;

use actix_web::web;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::core::CatalogStore;
use crate::services::{BioRequests, GeminiClient};

/// Application state shared across all handlers
///
/// The store sits behind one mutex so each command applies fully before the
/// next one starts. Bio generation runs without holding it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<CatalogStore>>,
    pub bio_assist: Arc<GeminiClient>,
    pub bio_requests: Arc<Mutex<BioRequests>>,
}

impl AppState {
    pub fn new(store: CatalogStore, bio_assist: GeminiClient, max_tracked_requests: usize) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            bio_assist: Arc::new(bio_assist),
            bio_requests: Arc::new(Mutex::new(BioRequests::new(max_tracked_requests))),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(musicians::configure)
            .configure(bio::configure),
    );
}
