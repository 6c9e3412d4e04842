//! Backend service exposing a synthetic weather forecast, an authenticated
//! greeting, persisted url lookup by id, and a pass-through proxy to an
//! upstream weather API.
//!
//! Randomness, the record store, authentication, and the upstream fetch are
//! injected as narrow traits through [`routes::AppState`], so request
//! handling stays deterministic under test.

pub mod auth;
pub mod config;
pub mod forecast;
pub mod routes;
pub mod store;
pub mod upstream;
