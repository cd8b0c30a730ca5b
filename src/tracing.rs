//! Logging setup. Everything goes to stderr or the test writer; stdout is the MCP channel.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `framework_docs_mcp=debug`.
pub const LOG_ENV: &str = "FRAMEWORK_DOCS_LOG";

static INIT: Once = Once::new();

#[derive(Clone, Copy)]
enum Sink {
    Stderr,
    TestWriter,
}

/// Install the global subscriber for the server process. Later calls are no-ops.
pub fn init() {
    install(Sink::Stderr, "info");
}

/// Install the global subscriber with the test writer so output is captured per test.
pub fn init_for_tests() {
    install(Sink::TestWriter, "debug");
}

fn install(sink: Sink, default_directive: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        let installed = match sink {
            Sink::Stderr => builder.with_writer(std::io::stderr).try_init(),
            Sink::TestWriter => builder.with_test_writer().try_init(),
        };
        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
