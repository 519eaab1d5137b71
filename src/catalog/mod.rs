//! Vendor catalog loading.
//!
//! The catalog is a single static JSON document fetched once per page load.
//! This module owns the request correlation scheme and the payload parser;
//! the actual HTTP call is made by the plugin shim through Zellij's web
//! request API.
//!
//! # Modules
//!
//! - `payload`: Response parsing into a [`Catalog`]
//! - `request`: Request context encoding for routing results

mod payload;
mod request;

pub use payload::{is_success, parse_document, parse_response, Catalog};
pub use request::RequestKind;
