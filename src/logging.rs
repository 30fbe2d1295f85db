use tracing_subscriber::EnvFilter;

/// Sets up the stderr subscriber. Each `-v` lowers the level for this
/// binary and the library one step below `warn`; `RUST_LOG` wins if set.
pub fn init(verbosity: u8) {
    let level = ["warn", "info", "debug", "trace"][usize::from(verbosity.min(3))];
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("litcal={level},liturgical_calendars={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
