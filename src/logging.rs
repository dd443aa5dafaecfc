use env_logger::Builder;
use std::time::Instant;

/// Set up `env_logger` for a program using this crate.
///
/// Lines carry the thread, the time since this call and the level. The
/// `RUST_LOG` variable still applies on top of the default level, which is
/// `Debug` when `verbose` and `Info` otherwise. Calling it again is a no-op.
pub fn init_logging(verbose: bool) {
    use std::io::Write;

    let start = Instant::now();
    let mut builder = Builder::new();
    builder.format(move |buf, record| {
        writeln!(
            buf,
            "[{:?}] {:.2?} - {}: {}",
            std::thread::current().id(),
            Instant::now() - start,
            record.level(),
            record.args()
        )
    });
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    if builder.try_init().is_err() {
        debug!("logging was already initialized");
    }
}
