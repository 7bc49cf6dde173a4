//! HTTP server for sheetd.
//!
//! Exposes the dataset over a small REST surface:
//!
//! - `GET /api/data` — fetch the full dataset
//! - `POST /api/columns` — replace the column set, pruning removed keys
//! - `POST /api/records` — append one record (201)
//! - `DELETE /api/records/{index}` — remove a record by position
//!
//! Every mutating route loads the full dataset, mutates in memory, persists
//! in full, and responds with the complete post-operation dataset. All
//! responses carry permissive cross-origin headers; `OPTIONS` to any path
//! answers 204 without touching the store.

pub mod body;
pub mod config;
pub mod cors;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::SheetServer;
