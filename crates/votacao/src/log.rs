pub use tracing::{debug, error, info, trace, warn};

use crate::errors::LogError;

#[cfg(target_arch = "wasm32")]
/// Setup the logging system for the browser.
/// Installs the panic hook that forwards panics to the console, then the
/// [`tracing-web`] console writer and performance layer when the `dev-logging`
/// feature is enabled.
pub fn setup() -> Result<(), LogError> {
    console_error_panic_hook::set_once();

    #[cfg(feature = "dev-logging")]
    {
        use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
        use tracing_subscriber::fmt::time::UtcTime;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(tracing_web::MakeConsoleWriter)
            .with_span_events(FmtSpan::ACTIVE);
        let perf_layer =
            tracing_web::performance_layer().with_details_from_fields(Pretty::default());

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .try_init()
            .map_err(|e| LogError::TracingSubscriber(Box::new(e)))?;
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
/// Setup the logging system for native builds (tests and tooling).
/// This function will install the [`color_eyre`] error reporting system
/// and the [`tracing-subscriber`] logging system, defaulting `RUST_LOG`
/// to debug output for this crate when it is not set.
pub fn setup() -> Result<(), LogError> {
    use tracing_subscriber::EnvFilter;

    color_eyre::install().map_err(LogError::ColorEyre)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("votacao=debug,votacao_frontend=debug"));
    tracing_subscriber::fmt::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
