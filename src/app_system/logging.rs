/// Installs the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (normally
/// [`CartConfig::log_level`](super::CartConfig)) is used. Safe to call more
/// than once; later calls are no-ops.
///
/// ```bash
/// RUST_LOG=debug rocket_cart show
/// RUST_LOG=rocket_cart::cart_service=debug,info rocket_cart add 1
/// ```
pub fn setup_tracing(default_directive: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
