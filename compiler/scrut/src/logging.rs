//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Level used when neither `SCRUT_LOG` nor `RUST_LOG` is set.
const DEFAULT_DIRECTIVES: &str = "warn";

/// Initialize tracing output on stderr.
///
/// Filter directives come from `SCRUT_LOG`, then `RUST_LOG`, then
/// `DEFAULT_DIRECTIVES`. Set `SCRUT_LOG_TREE=1` for indented span trees.
/// Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let directives = std::env::var("SCRUT_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| DEFAULT_DIRECTIVES.to_string());
        let filter = EnvFilter::new(directives);

        if tree_enabled() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

fn tree_enabled() -> bool {
    std::env::var("SCRUT_LOG_TREE").is_ok_and(|value| value == "1")
}
