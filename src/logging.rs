use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging. `RUST_LOG` directives take precedence over
/// the built-in default level.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("taigi_db_builder=info".parse().unwrap()),
        )
        .with(console_layer)
        .init();
}
