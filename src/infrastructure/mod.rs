//! Infrastructure layer for sandbox paths and asset URLs.
//!
//! The plugin runs inside Zellij's WASI sandbox: static assets are reached over
//! HTTP relative to a configured base URL, and scratch output goes to the
//! plugin's `/data` directory.

pub mod paths;

pub use paths::{catalog_url, data_dir, is_absolute_url, normalize_base_url, resolve_asset_url, CATALOG_FILE};
