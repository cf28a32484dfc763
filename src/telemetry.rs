//! Telemetry helpers for applications embedding `period-series`.
//!
//! The engine only emits `tracing` events; installing a subscriber stays the
//! host's decision. Call `init_default_tracing` for a compact env-filtered
//! subscriber or wire your own.
//!
//! Emitted targets:
//! - `period_series::api`: one `debug` summary per built series.
//! - `period_series::core::merge`: `debug` join counts, `trace` per dropped row.
//! - `period_series::core::period_key`: `trace` key generation ranges.
//!
//! `RUST_LOG=period_series=debug` shows the per-call summaries.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
