//! Domain layer for the brand showcase.
//!
//! Holds the host-independent types: vendor records as they arrive from the
//! catalog document, the category/filter vocabulary, and the error type. Nothing
//! here touches Zellij APIs or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`vendor`]: Vendor record model and normalization helpers
//! - [`category`]: Filter tokens and vocabulary derivation

pub mod category;
pub mod error;
pub mod vendor;

pub use category::{locale_cmp, vocabulary, FilterToken};
pub use error::{Result, ShowcaseError};
pub use vendor::VendorRecord;
