//! Tracing pipeline with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → RotatingFile
//! ```
//!
//! Spans land in `/data/brand-showcase-otlp.json` (Zellij maps `/data` to the
//! plugin's data directory). The file rotates at 5 MiB and keeps two backups.
//! Verbosity follows the `trace_level` plugin option, default `info`.

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, DEFAULT_LEVEL, TRACE_FILE};
