//! Subscriber setup.

use super::exporter::{file_tracer_provider, SCOPE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the live trace file inside the plugin data directory.
pub const TRACE_FILE: &str = "brand-showcase-otlp.json";

/// Level used when `trace_level` is not configured.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to `/data/brand-showcase-otlp.json`.
///
/// Filter directives come from `config.trace_level`, falling back to
/// [`DEFAULT_LEVEL`]. Any failure (unwritable data directory, a subscriber
/// already installed) leaves tracing disabled and the plugin running.
///
/// ```rust,no_run
/// use brand_showcase::observability::init_tracing;
/// use brand_showcase::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("brand_showcase=debug".to_string()),
///     ..Config::default()
/// });
/// ```
pub fn init_tracing(config: &Config) {
    let directives = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", "Brand Showcase")]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SCOPE_NAME);

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(directives))
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
