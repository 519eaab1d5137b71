//! Path and URL utilities for the Zellij sandbox environment.
//!
//! Static assets live under a configurable base URL (the site's base path),
//! and the plugin's own scratch files live in Zellij's per-plugin `/data`
//! directory.

use std::path::PathBuf;

/// File name of the vendor catalog relative to the base URL.
pub const CATALOG_FILE: &str = "vendors_with_images.json";

/// Returns the plugin data directory.
///
/// Zellij maps `/data` to a per-plugin folder that survives reloads of the
/// plugin but not of the session; only trace output is written there.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/data")
}

/// Normalizes a base URL so relative assets can be appended to it.
///
/// Trims whitespace and guarantees exactly one trailing slash.
///
/// # Examples
///
/// ```
/// use brand_showcase::infrastructure::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://example.com/site"), "https://example.com/site/");
/// assert_eq!(normalize_base_url(" https://example.com/ "), "https://example.com/");
/// ```
#[must_use]
pub fn normalize_base_url(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    format!("{trimmed}/")
}

/// Returns `true` for URLs that carry their own scheme.
#[must_use]
pub fn is_absolute_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}

/// Resolves an asset reference against the base URL.
///
/// Absolute URLs are returned unchanged (protocol-relative ones get `https:`);
/// root-relative paths are joined to the base URL's origin; anything else is
/// appended to the base path.
///
/// # Examples
///
/// ```
/// use brand_showcase::infrastructure::resolve_asset_url;
///
/// let base = "https://example.com/site/";
/// assert_eq!(resolve_asset_url(base, "logos/a.png"), "https://example.com/site/logos/a.png");
/// assert_eq!(resolve_asset_url(base, "/logos/a.png"), "https://example.com/logos/a.png");
/// assert_eq!(resolve_asset_url(base, "https://cdn.test/a.png"), "https://cdn.test/a.png");
/// ```
#[must_use]
pub fn resolve_asset_url(base: &str, reference: &str) -> String {
    let reference = reference.trim();
    if is_absolute_url(reference) {
        return reference
            .strip_prefix("//")
            .map_or_else(|| reference.to_string(), |rest| format!("https://{rest}"));
    }

    let base = normalize_base_url(base);
    if let Some(rooted) = reference.strip_prefix('/') {
        return format!("{}/{rooted}", origin_of(&base));
    }

    let relative = reference.strip_prefix("./").unwrap_or(reference);
    format!("{base}{relative}")
}

/// URL of the vendor catalog document under the base URL.
#[must_use]
pub fn catalog_url(base: &str) -> String {
    format!("{}{CATALOG_FILE}", normalize_base_url(base))
}

fn origin_of(base: &str) -> &str {
    let after_scheme = base.find("://").map_or(0, |i| i + 3);
    base[after_scheme..]
        .find('/')
        .map_or(base.trim_end_matches('/'), |i| &base[..after_scheme + i])
}
