//! faqbot server - HTTP REST API for the question-answering engine
//!
//! This crate exposes the faqbot matching engine over HTTP:
//!
//! - **Query answering**: `POST /chat` takes `{"message": "..."}` and
//!   replies `{"response": "..."}` — either the best-matching catalog
//!   answer or the fixed fallback reply
//! - **Match introspection**: `POST /api/v1/match` returns the full match
//!   result (score, matched flag, matched question) for tuning
//! - **Health**: liveness (`/health`) and readiness (`/ready`) probes
//!
//! # Startup behavior
//!
//! The dataset is loaded exactly once before the listener binds. A missing,
//! unreadable, or malformed dataset aborts startup — the server never
//! serves with partial data. The loaded catalog is immutable and shared
//! lock-free across requests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
