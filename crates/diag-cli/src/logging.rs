use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const ENV_VAR: &str = "BITDIAG_LOG";
const DEFAULT_FILTER: &str = "bitdiag=info,diag_engine=info,diag_seq=warn";
const VERBOSE_FILTER: &str = "bitdiag=debug,diag_engine=debug,diag_seq=debug";

/// Installs the stderr subscriber once per process.
///
/// `BITDIAG_LOG` wins over `configured`, which wins over the built-in default.
pub fn init_tracing(configured: Option<&str>, verbose: bool) {
    INIT.call_once(|| {
        let fallback = match configured {
            Some(directive) => directive,
            None if verbose => VERBOSE_FILTER,
            None => DEFAULT_FILTER,
        };
        let filter = EnvFilter::try_from_env(ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
