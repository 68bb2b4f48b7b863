use tracing_subscriber::filter::LevelFilter;

/// Installs a global logger printing to stderr.
///
/// Debug output is only shown when `debug` is set. Does nothing if a logger
/// is already installed.
pub fn init(debug: bool) {
    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    if let Err(error) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
    {
        log::debug!("Logger already installed: {error}");
    }
}
