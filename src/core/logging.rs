use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber. `RUST_LOG` wins over
/// `default_directives` when set.
pub fn init_tracing(default_directives: &str) {
    let default_directives = default_directives.to_string();
    // Ignore the error so calling this twice (e.g. from tests) is harmless
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Default filter for one-shot CLI commands.
pub fn cli_directives() -> String {
    format!("{}=debug", env!("CARGO_CRATE_NAME"))
}

/// Default filter for the API server.
pub fn server_directives() -> String {
    // axum logs rejections from built-in extractors with the `axum::rejection`
    // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
    format!(
        "{}=debug,tower_http=debug,axum::rejection=trace",
        env!("CARGO_CRATE_NAME")
    )
}
