use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "dynamic_form=warn";

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the
/// default filter. Events go to stderr so the rendered form on stdout stays
/// readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        tracing::debug!("Dynamic Form tracing initialized.");
    });
}
