//! Observability setup for charsmith: structured logging and optional
//! OpenTelemetry span export.

pub mod tracing_setup;
