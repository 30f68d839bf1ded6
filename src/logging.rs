pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    // stdout is reserved for the JSON document, env_logger writes to stderr.
    builder.filter(None, log::LevelFilter::Warn);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
