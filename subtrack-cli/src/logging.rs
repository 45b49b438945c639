use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,subtrack=info,subtrack_ingest=info,subtrack_finance=info",
        _ => "warn,subtrack=debug,subtrack_ingest=debug,subtrack_finance=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
