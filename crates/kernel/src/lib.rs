//! Data Federation Kernel
//!
//! REST façade over a biomedical data catalog: filterable listings,
//! composite-key lookups, grouped counts, and summary statistics over
//! subjects, samples, files, namespaces, and organizations. The catalog is
//! an injected in-memory collection today, designed to be swapped for a
//! persistent backend without changing the allowlist-driven query contract.
//!
//! The `datafed` binary wires this library to a TCP listener; integration
//! tests drive [`routes::router`] directly.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod pagination;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;
