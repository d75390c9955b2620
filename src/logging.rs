//! Diagnostic logging. User-facing output goes through `ui::messages`;
//! this is the developer channel, written to stderr and silent by default.

use std::sync::Once;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::{Directive, LevelFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once. `RUST_LOG` refines the default
/// `subtracker=warn` directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let default: Directive = "subtracker=warn"
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into());

        let filter = EnvFilter::from_default_env().add_directive(default);

        // try_init: a subscriber may already be installed by an embedding test
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
