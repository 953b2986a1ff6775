//! # APS Token Service Library
//!
//! Server-side proxy for Autodesk Platform Services two-legged OAuth2.
//! Exchanges a confidential client credential pair for a short-lived
//! access token, caches it in memory until near-expiry, and exposes it
//! to a trusted frontend over a single HTTP endpoint.
//!
//! Modules:
//! - `config` — environment-sourced service settings
//! - `cache` — single-entry token cache
//! - `exchange` — outbound client-credentials exchange
//! - `server` — HTTP surface (`/api/token`)
//! - `observability` — prometheus metrics and `/metrics` route

pub mod config;
pub mod cache;
pub mod exchange;
pub mod server;
pub mod observability;
pub mod helpers;
pub mod utils;
pub mod tests;

pub use crate::config::settings::Settings;
