use tracing_subscriber::EnvFilter;

// RUST_LOG wins when set, otherwise info for everything
pub fn init() {

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // a subscriber may already be installed (tests), keep the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();

}
