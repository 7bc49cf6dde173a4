use std::sync::Arc;

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::sync::{Mutex, MutexGuard};
use tower_http::trace::TraceLayer;

use sheetd_store::DatasetStore;

use crate::cors;
use crate::handler;

/// Shared request-handling state: the dataset store plus the write lock.
///
/// Mutating handlers hold the lock across their whole load-mutate-save
/// sequence so two concurrent writers cannot overwrite each other's effect.
/// Reads go straight to the store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DatasetStore>,
    write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn DatasetStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &dyn DatasetStore {
        self.store.as_ref()
    }

    /// Acquire the write lock for a load-mutate-save sequence.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}

/// Build the axum router with all sheetd endpoints.
///
/// Unmatched paths and unmatched methods on known paths both fall back to
/// the JSON 404. The cross-origin layer wraps the whole router, so
/// preflight requests never reach a handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/data",
            get(handler::get_data).fallback(handler::not_found),
        )
        .route(
            "/api/columns",
            post(handler::replace_columns).fallback(handler::not_found),
        )
        .route(
            "/api/records",
            post(handler::append_record).fallback(handler::not_found),
        )
        .route(
            "/api/records/:index",
            delete(handler::remove_record).fallback(handler::not_found),
        )
        .fallback(handler::not_found)
        .layer(middleware::from_fn(cors::cross_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
