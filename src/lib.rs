mod ptable;
pub use ptable::*;

mod symbol;
pub use symbol::*;

mod molfile;
pub use molfile::*;

mod graph;
pub use graph::*;

mod adjacency;
pub use adjacency::*;

mod canon;
pub use canon::*;

mod write;
pub use write::*;

mod visualize;
pub use visualize::*;

mod permute;
pub use permute::*;

/// Initialize the global tracing subscriber at the given level. Safe to call
/// more than once; later calls are ignored.
pub fn init_logging(level: &str) {
    let level = match level {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}
